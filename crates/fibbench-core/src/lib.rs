//! # fibbench-core
//!
//! Core library for the FibBench harness: the three benchmarked Fibonacci
//! algorithms (iterative, memoized dynamic programming, naive recursion)
//! with operation counting, the integer-coded run modes understood by the
//! benchmarked executables, and the `Cell` value stored in result tables.

pub mod algorithms;
pub mod cell;
pub mod constants;
pub mod error;
pub mod measure;
pub mod mode;
pub mod progress;

// Re-exports
pub use algorithms::{Algorithm, OpCounter};
pub use cell::Cell;
pub use constants::{exit_codes, CSV_HEADER, PLACEHOLDER};
pub use error::BenchError;
pub use measure::{measure, Measurement};
pub use mode::Mode;
pub use progress::CancellationToken;

/// Compute the first `n` Fibonacci numbers (1-indexed, `F(1) = F(2) = 1`)
/// with the iterative algorithm.
///
/// # Example
/// ```
/// assert_eq!(fibbench_core::series(7), [1, 1, 2, 3, 5, 8, 13]);
/// assert!(fibbench_core::series(0).is_empty());
/// ```
#[must_use]
pub fn series(n: u64) -> Vec<u64> {
    Algorithm::Iterative.series(n, &mut OpCounter::new())
}
