use crate::error::MrrError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global JSON log subscriber. `RUST_LOG` overrides `log_level`.
pub fn init_tracing(service_name: &str, log_level: &str) -> Result<(), MrrError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()
        .map_err(|e| {
            MrrError::LoggingError(format!(
                "Failed to initialize tracing for service '{}': {}",
                service_name, e
            ))
        })?;

    tracing::info!(service_name = %service_name, "Tracing initialized");
    Ok(())
}
