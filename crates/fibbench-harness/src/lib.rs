//! # fibbench-harness
//!
//! Drives a benchmarked executable across a grid of input sizes, degrading
//! the requested mode when the recursive algorithm times out, and persists
//! the results as CSV tables.

pub mod interfaces;
pub mod invoker;
pub mod summary;
pub mod sweep;
pub mod table;

pub use interfaces::{NoOpObserver, SweepObserver};
pub use invoker::{parse_output, Executable, InvokeError, Invoker, ProcessInvoker, RunOutput};
pub use sweep::{run_sweep, StopReason, SweepConfig, SweepOutcome};
pub use summary::{save_summary, SweepSummary};
pub use table::{load_table, read_table, save_table, write_table, TableError, TableRow};
