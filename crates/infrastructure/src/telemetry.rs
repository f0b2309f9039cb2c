//! Tracing initialization

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetrySettings;

/// Errors from telemetry setup
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Subscriber initialization failed (usually: already initialized)
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Initialize console tracing
///
/// `RUST_LOG` takes precedence over the configured filter. Returns an
/// error if a global subscriber was already installed.
pub fn init_tracing(settings: &TelemetrySettings) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}
