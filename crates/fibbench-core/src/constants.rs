//! Constants shared by the runner, the plotter, and the counterpart executable.

/// Header row of every timings/operations table.
pub const CSV_HEADER: [&str; 4] = ["N", "Iterative", "Dynamic Programming", "Recursive"];

/// Marker for a value that was not measured.
pub const PLACEHOLDER: &str = "-";

/// Default per-invocation timeout; a bare number is seconds.
pub const DEFAULT_TIMEOUT: &str = "60";

/// Default base name for runner output files.
pub const DEFAULT_OUT_FILE: &str = "fib_run.csv";

/// Prefix of the timings table written by the runner.
pub const TIMINGS_PREFIX: &str = "timings_";

/// Prefix of the operation-count table written by the runner.
pub const OPS_PREFIX: &str = "ops_";

/// Default executable under test.
pub const DEFAULT_EXECUTABLE: &str = "fibseries";

/// Largest series length the counterpart executable accepts; every term
/// and every memo slot is kept in memory.
pub const MAX_SERIES_LEN: u64 = 10_000_000;

/// Decimal places used when printing elapsed seconds.
pub const TIME_PRECISION: usize = 9;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error; the sweep was stopped by an execution failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// A timeout occurred that could not be absorbed by degrading the mode.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Sweep cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_joins_to_contract() {
        assert_eq!(CSV_HEADER.join(","), "N,Iterative,Dynamic Programming,Recursive");
    }

    #[test]
    fn output_names() {
        assert_eq!(format!("{TIMINGS_PREFIX}{DEFAULT_OUT_FILE}"), "timings_fib_run.csv");
        assert_eq!(format!("{OPS_PREFIX}{DEFAULT_OUT_FILE}"), "ops_fib_run.csv");
    }
}
