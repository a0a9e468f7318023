//! Escape-time evaluation for `z <- z^2 + c`.
//!
//! The iteration loop in [`escape_time`] defines the result. The two membership
//! tests ([`in_period2_bulb`], [`in_main_cardioid`]) are sufficient conditions
//! for never escaping and only ever replace the loop with its own answer.

use crate::EscapeFloat;
use mandelbench_core::{EscapeResult, Shortcut};

/// Point lies strictly inside the period-2 bulb, the disk of radius 1/4
/// centred at `-1`.
#[inline]
pub fn in_period2_bulb<T: EscapeFloat>(cx: T, cy: T) -> bool {
    let q = (cx + T::ONE) * (cx + T::ONE) + cy * cy;
    q < T::BULB_RADIUS_SQ
}

/// Point lies strictly inside the main cardioid.
///
/// With `p = |c - 1/4|`, the boundary is `x = p - 2p^2 + 1/4`.
#[inline]
pub fn in_main_cardioid<T: EscapeFloat>(cx: T, cy: T) -> bool {
    let p = ((cx - T::QUARTER) * (cx - T::QUARTER) + cy * cy).sqrt();
    cx < p - T::TWO * p * p + T::QUARTER
}

/// Run the first membership test that matches, bulb before cardioid.
#[inline]
pub fn classify_shortcut<T: EscapeFloat>(cx: T, cy: T) -> Option<Shortcut> {
    if in_period2_bulb(cx, cy) {
        Some(Shortcut::Period2Bulb)
    } else if in_main_cardioid(cx, cy) {
        Some(Shortcut::MainCardioid)
    } else {
        None
    }
}

/// Plain escape-time loop with no shortcuts.
///
/// Counts steps while `|z|^2 <= 4` and the budget lasts, so the result is in
/// `[0, max_iterations]`.
#[inline]
pub fn escape_time<T: EscapeFloat>(cx: T, cy: T, max_iterations: u32) -> u32 {
    let mut zx = T::ZERO;
    let mut zy = T::ZERO;
    let mut iterations = 0;

    while zx * zx + zy * zy <= T::ESCAPE_RADIUS_SQ && iterations < max_iterations {
        // zy must see the old zx
        let new_zx = zx * zx - zy * zy + cx;
        zy = T::TWO * zx * zy + cy;
        zx = new_zx;
        iterations += 1;
    }

    iterations
}

/// Escape-time count for `c = cx + i*cy` in double precision, shortcuts enabled.
pub fn evaluate(cx: f64, cy: f64, max_iterations: u32) -> u32 {
    EscapeTimeEvaluator::new(max_iterations).iterations(cx, cy)
}

/// Evaluator with a fixed iteration budget and a shortcut toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscapeTimeEvaluator {
    max_iterations: u32,
    shortcuts: bool,
}

impl EscapeTimeEvaluator {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            shortcuts: true,
        }
    }

    pub fn with_shortcuts(mut self, enabled: bool) -> Self {
        self.shortcuts = enabled;
        self
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn shortcuts(&self) -> bool {
        self.shortcuts
    }

    /// Evaluate a point and report which path produced the answer.
    #[inline]
    pub fn compute_point<T: EscapeFloat>(&self, cx: T, cy: T) -> EscapeResult {
        if self.shortcuts {
            if let Some(shortcut) = classify_shortcut(cx, cy) {
                return EscapeResult::shortcut(self.max_iterations, shortcut);
            }
        }
        EscapeResult::iterated(escape_time(cx, cy, self.max_iterations))
    }

    #[inline]
    pub fn iterations<T: EscapeFloat>(&self, cx: T, cy: T) -> u32 {
        self.compute_point(cx, cy).iterations
    }
}
