//! Timing a single algorithm run.

use std::time::{Duration, Instant};

use crate::algorithms::{Algorithm, OpCounter};

/// Result of timing one algorithm over one series length.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub n: u64,
    pub elapsed: Duration,
    pub operations: u64,
    pub series: Vec<u64>,
}

impl Measurement {
    /// The `time,ops` pair as printed by the counterpart executable.
    #[must_use]
    pub fn csv_pair(&self) -> String {
        format!(
            "{:.prec$},{}",
            self.elapsed.as_secs_f64(),
            self.operations,
            prec = crate::constants::TIME_PRECISION
        )
    }
}

/// Compute the series of length `n` with `algorithm`, timing only the
/// computation.
#[must_use]
pub fn measure(algorithm: Algorithm, n: u64) -> Measurement {
    let mut ops = OpCounter::new();
    let start = Instant::now();
    let series = algorithm.series(n, &mut ops);
    let elapsed = start.elapsed();
    tracing::debug!(%algorithm, n, ?elapsed, operations = ops.count(), "measured");
    Measurement {
        algorithm,
        n,
        elapsed,
        operations: ops.count(),
        series,
    }
}
