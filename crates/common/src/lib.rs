//! Shared configuration for the Tauros client crates.

mod environment;

pub use environment::{ParseEnvironmentError, TaurosEnvironment, ENVIRONMENT_ENV};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
