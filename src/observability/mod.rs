//! Logging setup.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Options for environment-based initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Whether verbose output was requested via CLI.
    pub verbose: bool,
}

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Initializes structured logging to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Safe to call more
/// than once; only the first call installs the subscriber.
pub fn init(options: InitOptions) {
    LOGGING_INIT.get_or_init(|| {
        let default_level = if options.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("causeway={default_level}")));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
