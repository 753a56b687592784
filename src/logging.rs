//! Diagnostic logging on stderr, kept apart from the stdout report.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `hashwatch=debug`.
pub const LOG_ENV: &str = "HASHWATCH_LOG";

/// Install the global subscriber. `HASHWATCH_LOG` wins over `verbose`.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
