//! Error handling and exit codes.

use fibbench_core::constants::exit_codes;
use fibbench_core::BenchError;
use fibbench_harness::StopReason;

/// Exit code for an error that aborted a binary.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BenchError>() {
        Some(BenchError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(BenchError::InvalidCell(_)) | None => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for how a sweep ended.
pub fn stop_exit_code(stop: &StopReason) -> i32 {
    match stop {
        StopReason::Completed => exit_codes::SUCCESS,
        StopReason::Failed(_) => exit_codes::ERROR_GENERIC,
        StopReason::TimedOut(_) => exit_codes::ERROR_TIMEOUT,
        StopReason::Cancelled => exit_codes::ERROR_CANCELED,
    }
}
