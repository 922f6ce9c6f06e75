//! Tracing setup shared by the binaries.

/// Install a `RUST_LOG`-driven subscriber on stderr, defaulting to warnings.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();
}
