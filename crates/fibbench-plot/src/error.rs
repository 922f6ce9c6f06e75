//! Plotting errors.

use std::path::PathBuf;

use fibbench_harness::TableError;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// An input table could not be read or parsed.
    #[error("failed to read {}: {source}", .path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    /// The drawing backend failed.
    #[error("failed to render chart: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
