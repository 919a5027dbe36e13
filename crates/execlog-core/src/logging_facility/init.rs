//! Logging initialization module
//!
//! Provides a single initialization point for the tracing subscriber.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber
///
/// Only the first call has an effect; later calls are ignored whatever
/// profile they pass.
///
/// # Profiles
///
/// - **Development**: Human-readable events at debug level
/// - **Production**: JSON events at info level (method lines are debug, so
///   only warnings about misuse get through unless `RUST_LOG` says otherwise)
/// - **Test**: Bare registry; use `init_test_capture()` to record events
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("execlog=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("execlog=info")),
                )
                .init();
        }
        Profile::Test => {
            // try_init: a capture subscriber may already own the global slot
            let _ = tracing_subscriber::registry().try_init();
        }
    });
}
