use tracing_subscriber::{EnvFilter, fmt};

/// Log filter from `RUST_LOG`, defaulting to `info`. Logs go to stderr so
/// command output on stdout stays machine readable.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("logging ready");
}
