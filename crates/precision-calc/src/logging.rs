//! Tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Verbosity;

/// Builds the event filter: `RUST_LOG` wins, otherwise the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Initialize tracing to stderr so stdout stays machine-readable.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbosity: Verbosity) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // try_init fails only when a global subscriber is already set.
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(stderr_layer)
        .try_init();
}
