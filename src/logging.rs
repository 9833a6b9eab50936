//! Tracing setup.
//!
//! The filter is read from `STOWAGE_LOG` using `EnvFilter` directive syntax
//! (`debug`, `stowage_s3=debug,info`, ...) and defaults to `info`.

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STOWAGE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Create a tracing subscriber that respects `STOWAGE_LOG`.
pub fn subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
}

/// Install [`subscriber`] as the global default.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_accepts_events() {
        tracing::subscriber::with_default(subscriber(), || {
            tracing::info!(key = "s3-access", "logging smoke test");
        });
    }

    #[test]
    fn test_init_only_once() {
        let first = init();
        let second = init();
        // Another test binary may already own the global subscriber.
        assert!(first.is_err() || second.is_err());
    }
}
