use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// what the user is meant to read. Filter comes from `RUST_LOG`, default `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
