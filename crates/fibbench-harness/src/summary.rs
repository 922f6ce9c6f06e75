//! JSON summary of a finished sweep.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sweep::{SweepConfig, SweepOutcome};

/// What a sweep did, for bookkeeping next to the CSV tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub executable: String,
    pub max_n: u64,
    pub step: u64,
    pub timeout_secs: f64,
    pub rows: usize,
    pub last_n: Option<u64>,
    pub downgraded_at: Option<u64>,
    pub final_mode: u8,
    pub stop: String,
    pub timings_file: String,
    pub operations_file: String,
}

impl SweepSummary {
    #[must_use]
    pub fn new(
        executable: &str,
        config: &SweepConfig,
        timeout: Duration,
        outcome: &SweepOutcome,
        files: (&Path, &Path),
    ) -> Self {
        Self {
            executable: executable.to_string(),
            max_n: config.max_n(),
            step: config.step(),
            timeout_secs: timeout.as_secs_f64(),
            rows: outcome.rows(),
            last_n: outcome.timings.last().map(|r| r.n),
            downgraded_at: outcome.downgraded_at,
            final_mode: outcome.final_mode.code(),
            stop: outcome.stop.to_string(),
            timings_file: files.0.display().to_string(),
            operations_file: files.1.display().to_string(),
        }
    }
}

/// Write `summary` as pretty JSON.
pub fn save_summary(summary: &SweepSummary, path: &Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpObserver;
    use crate::invoker::{InvokeError, Invoker, RunOutput};
    use crate::sweep::run_sweep;
    use fibbench_core::cell::Cell;
    use fibbench_core::mode::Mode;
    use fibbench_core::progress::CancellationToken;

    struct Constant;

    impl Invoker for Constant {
        fn run_single(&self, _n: u64, mode: Mode) -> Result<RunOutput, InvokeError> {
            let cells = vec![Cell::Value(1.0); mode.algorithms().len()];
            Ok(RunOutput {
                timings: cells.clone(),
                operations: cells,
            })
        }

        fn describe(&self) -> String {
            "constant".into()
        }
    }

    #[test]
    fn save_and_load() {
        let config = SweepConfig::new(7, 3).unwrap();
        let outcome = run_sweep(&Constant, &config, &CancellationToken::new(), &NoOpObserver);
        let summary = SweepSummary::new(
            "constant",
            &config,
            Duration::from_millis(1500),
            &outcome,
            (Path::new("timings_x.csv"), Path::new("ops_x.csv")),
        );
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.last_n, Some(7));
        assert_eq!(summary.stop, "completed");
        assert!((summary.timeout_secs - 1.5).abs() < f64::EPSILON);

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        save_summary(&summary, &path).unwrap();
        let back: SweepSummary =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, summary);
    }
}
