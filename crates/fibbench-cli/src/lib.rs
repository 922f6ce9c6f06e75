//! # fibbench-cli
//!
//! Terminal output, sweep progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CliSweepObserver, FigurePresenter};
