//! Debug tracing for nvrun itself.
//!
//! The yellow/red lines users normally see come from the reporter; this only
//! adds spawn, exit-status and settings events when asked for:
//!
//! ```bash
//! RUST_LOG=nvrun=debug nvrun npm test
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Send `tracing` events to stderr, filtered by `RUST_LOG` (`warn` when unset).
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
