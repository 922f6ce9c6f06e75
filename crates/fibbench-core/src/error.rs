//! Error type shared by the core crate.

/// Error type for core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BenchError {
    /// Configuration error (e.g. an unknown mode code).
    #[error("configuration error: {0}")]
    Config(String),

    /// A table cell that is neither a number nor the placeholder.
    #[error("invalid cell value: {0:?}")]
    InvalidCell(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_error_display() {
        let err = BenchError::Config("mode 9".into());
        assert_eq!(err.to_string(), "configuration error: mode 9");

        let err = BenchError::InvalidCell("abc".into());
        assert_eq!(err.to_string(), "invalid cell value: \"abc\"");
    }
}
