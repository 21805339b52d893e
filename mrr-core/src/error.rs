use thiserror::Error;

#[derive(Debug, Error)]
pub enum MrrError {
    #[error("Subscription valuation failed: {0}")]
    Valuation(anyhow::Error),

    #[error("Discount calculation failed: {0}")]
    Discount(anyhow::Error),

    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),

    #[error("Invalid report timezone offset: {0}")]
    InvalidOffset(String),

    #[error("Logging initialization error: {0}")]
    LoggingError(String),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for MrrError {
    fn from(err: config::ConfigError) -> Self {
        MrrError::ConfigError(anyhow::Error::new(err))
    }
}
