//! Order-independent wrapping checksum over iteration counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// Sum of iteration counts modulo 2^64.
///
/// All accumulation goes through `wrapping_add`, so partial checksums can be
/// combined in any order (and from any number of workers) with an identical result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(pub u64);

impl Checksum {
    pub const ZERO: Checksum = Checksum(0);

    #[inline]
    pub fn add(&mut self, iterations: u32) {
        self.0 = self.0.wrapping_add(iterations as u64);
    }

    /// Fold another partial checksum into this one.
    #[inline]
    pub fn combine(self, other: Checksum) -> Checksum {
        Checksum(self.0.wrapping_add(other.0))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Sum for Checksum {
    fn sum<I: Iterator<Item = Checksum>>(iter: I) -> Self {
        iter.fold(Checksum::ZERO, Checksum::combine)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
