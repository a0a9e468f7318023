//! Floating point abstraction for the escape-time loop.
//!
//! The evaluator is generic over this trait so the double precision reference
//! and the single precision variant share one implementation.

use std::ops::{Add, Mul, Sub};

pub trait EscapeFloat:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const QUARTER: Self;
    /// Squared radius of the period-2 bulb, 1/16
    const BULB_RADIUS_SQ: Self;
    /// Squared escape radius, |z| > 2 diverges
    const ESCAPE_RADIUS_SQ: Self;

    fn from_f64(value: f64) -> Self;

    /// Correctly rounded IEEE square root
    fn sqrt(self) -> Self;
}

macro_rules! impl_escape_float {
    ($t:ty) => {
        impl EscapeFloat for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const QUARTER: Self = 0.25;
            const BULB_RADIUS_SQ: Self = 0.0625;
            const ESCAPE_RADIUS_SQ: Self = 4.0;

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }
        }
    };
}

impl_escape_float!(f64);
impl_escape_float!(f32);

#[cfg(test)]
mod tests {
    use super::*;

    fn bulb_radius_sq<T: EscapeFloat>() -> T {
        T::QUARTER * T::QUARTER
    }

    #[test]
    fn constants_are_exact() {
        assert_eq!(bulb_radius_sq::<f64>(), <f64 as EscapeFloat>::BULB_RADIUS_SQ);
        assert_eq!(bulb_radius_sq::<f32>(), <f32 as EscapeFloat>::BULB_RADIUS_SQ);
        assert_eq!(<f64 as EscapeFloat>::ESCAPE_RADIUS_SQ, 4.0);
    }

    #[test]
    fn sqrt_matches_std() {
        for v in [0.0, 0.0625, 2.0, 1e-300, 12345.678] {
            assert_eq!(<f64 as EscapeFloat>::sqrt(v), f64::sqrt(v));
        }
    }

    #[test]
    fn from_f64_narrows_for_f32() {
        assert_eq!(<f32 as EscapeFloat>::from_f64(0.1), 0.1_f32);
        assert_eq!(<f64 as EscapeFloat>::from_f64(0.1), 0.1_f64);
    }
}
