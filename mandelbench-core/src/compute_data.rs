// mandelbench-core/src/compute_data.rs

use crate::Checksum;
use serde::{Deserialize, Serialize};

/// Which analytic membership test classified a point without iterating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
    /// Disk of radius 1/4 centred at -1
    Period2Bulb,
    MainCardioid,
}

/// Outcome of evaluating one sample point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeResult {
    /// Iteration count in `[0, max_iterations]`. `max_iterations` means
    /// the point never escaped and is presumed to be in the set.
    pub iterations: u32,
    /// Set when a shortcut answered instead of the iteration loop.
    #[serde(default)]
    pub shortcut: Option<Shortcut>,
}

impl EscapeResult {
    pub fn iterated(iterations: u32) -> Self {
        Self {
            iterations,
            shortcut: None,
        }
    }

    pub fn shortcut(max_iterations: u32, shortcut: Shortcut) -> Self {
        Self {
            iterations: max_iterations,
            shortcut: Some(shortcut),
        }
    }

    /// Whether the orbit left the escape radius within the budget
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iterations < max_iterations
    }
}

/// Tallies for a walk over some set of pixels.
///
/// Partial stats from independent tiles merge into the same totals regardless
/// of order. The checksum wraps; the counters cannot realistically overflow u64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    pub checksum: Checksum,
    pub pixels: u64,
    /// Pixels that reached `max_iterations` (shortcut hits included)
    pub interior: u64,
    pub bulb_hits: u64,
    pub cardioid_hits: u64,
}

impl RenderStats {
    #[inline]
    pub fn record(&mut self, result: &EscapeResult, max_iterations: u32) {
        self.checksum.add(result.iterations);
        self.pixels += 1;
        if !result.escaped(max_iterations) {
            self.interior += 1;
        }
        match result.shortcut {
            Some(Shortcut::Period2Bulb) => self.bulb_hits += 1,
            Some(Shortcut::MainCardioid) => self.cardioid_hits += 1,
            None => {}
        }
    }

    pub fn merge(self, other: RenderStats) -> RenderStats {
        RenderStats {
            checksum: self.checksum.combine(other.checksum),
            pixels: self.pixels + other.pixels,
            interior: self.interior + other.interior,
            bulb_hits: self.bulb_hits + other.bulb_hits,
            cardioid_hits: self.cardioid_hits + other.cardioid_hits,
        }
    }

    /// Pixels answered by either shortcut
    pub fn shortcut_hits(&self) -> u64 {
        self.bulb_hits + self.cardioid_hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_is_strictly_below_budget() {
        assert!(EscapeResult::iterated(0).escaped(512));
        assert!(EscapeResult::iterated(511).escaped(512));
        assert!(!EscapeResult::iterated(512).escaped(512));
        assert!(!EscapeResult::shortcut(512, Shortcut::MainCardioid).escaped(512));
    }

    #[test]
    fn record_tallies_each_category() {
        let mut stats = RenderStats::default();
        stats.record(&EscapeResult::iterated(3), 100);
        stats.record(&EscapeResult::iterated(100), 100);
        stats.record(&EscapeResult::shortcut(100, Shortcut::Period2Bulb), 100);
        stats.record(&EscapeResult::shortcut(100, Shortcut::MainCardioid), 100);

        assert_eq!(stats.checksum, Checksum(303));
        assert_eq!(stats.pixels, 4);
        assert_eq!(stats.interior, 3);
        assert_eq!(stats.bulb_hits, 1);
        assert_eq!(stats.cardioid_hits, 1);
        assert_eq!(stats.shortcut_hits(), 2);
    }

    #[test]
    fn merge_is_commutative() {
        let a = RenderStats {
            checksum: Checksum(u64::MAX),
            pixels: 10,
            interior: 4,
            bulb_hits: 1,
            cardioid_hits: 2,
        };
        let b = RenderStats {
            checksum: Checksum(5),
            pixels: 3,
            interior: 1,
            bulb_hits: 0,
            cardioid_hits: 1,
        };
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b).checksum, Checksum(4));
        assert_eq!(a.merge(b).pixels, 13);
    }

    #[test]
    fn merge_with_default_is_identity() {
        let mut stats = RenderStats::default();
        stats.record(&EscapeResult::iterated(7), 10);
        assert_eq!(stats.merge(RenderStats::default()), stats);
    }

    #[test]
    fn shortcut_serializes_snake_case() {
        let json = serde_json::to_string(&Shortcut::Period2Bulb).unwrap();
        assert_eq!(json, "\"period2_bulb\"");
    }
}
