//! # fibbench-plot
//!
//! Turns the timings and operation-count tables of two implementations
//! into comparative charts: iterative vs DP runtime, log-scale recursive
//! runtime, operation counts, and cross-implementation speedup.

pub mod chart;
pub mod error;
pub mod plan;
pub mod ratio;
pub mod series;

pub use chart::{render_svg, Line, LineChart, Marker, Scale};
pub use error::PlotError;
pub use plan::{
    load_dataset, missing_inputs, plan_charts, render_all, ChartPlan, Dataset, Implementation,
    C, PYTHON,
};
pub use ratio::{ratio, same_grid, speedup};
pub use series::Series;
