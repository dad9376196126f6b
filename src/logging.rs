//! Tracing initialisation for the verit binary
//!
//! Logs go to stderr so stdout only ever carries the version.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `info` over `warn`.
/// Only the first call takes effect.
pub fn init(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
