//! # Structured Logging Module
//!
//! One-time tracing initialization with an environment-driven filter and
//! optional JSON output for machine-readable logs.

use std::sync::OnceLock;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging. Safe to call more than once; only the
/// first call installs the subscriber.
pub fn init_structured_logging(json_logs: bool) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = env_filter();

        let initialized = if json_logs {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_filter(filter),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_filter(filter),
                )
                .try_init()
        };

        // A global subscriber may already be set (e.g. by a test harness);
        // that is not an error.
        if initialized.is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,flowstate=debug"))
}
