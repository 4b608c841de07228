//! Logging setup for the console host

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "pstnav=info";

/// Install a stderr subscriber filtered by `RUST_LOG`. Logs go to stderr
/// so they don't interleave with the rendered panel on stdout.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}
