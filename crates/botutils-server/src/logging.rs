//! `tracing` subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level selected by repeated `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global fmt subscriber. `RUST_LOG`, when set, wins over `verbosity`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let level = level_for_verbosity(verbosity).to_string().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
