use crate::{Checksum, ExecutionMode, Precision, RenderStats};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one benchmark run.
///
/// `Display` renders the two-line summary printed on stdout; the serde form
/// carries the full detail for `--json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Wall-clock seconds spent in the grid walk only
    pub compute_time_secs: f64,
    pub checksum: Checksum,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub shortcuts: bool,
    pub precision: Precision,
    pub mode: ExecutionMode,
    pub stats: RenderStats,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compute time: {:.6} s", self.compute_time_secs)?;
        write!(f, "Checksum: {}", self.checksum)
    }
}
