//! FibBench library — application logic for the `fibseries`, `fib-runner`
//! and `fib-plot` binaries.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
