//! Configuration for MRR reporting.

use crate::error::MrrError;
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use config::{builder::DefaultState, Config as Cfg, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

/// Resume dates are rendered with millisecond precision and a colon-free numeric offset.
const RESUME_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

#[derive(Debug, Deserialize, Clone)]
pub struct MrrConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Fixed offset such as `+05:30` for rendering resume dates. Host local time when unset.
    #[serde(default)]
    pub report_utc_offset: Option<String>,
}

fn default_service_name() -> String {
    "mrr-core".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl MrrConfig {
    pub fn load() -> Result<Self, MrrError> {
        dotenvy::dotenv().ok();

        Self::build(
            Cfg::builder()
                .add_source(File::with_name("mrr").required(false))
                .add_source(Environment::with_prefix("MRR").separator("__")),
        )
    }

    pub fn from_toml(contents: &str) -> Result<Self, MrrError> {
        Self::build(Cfg::builder().add_source(File::from_str(contents, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, MrrError> {
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn report_timezone(&self) -> Result<ReportTimezone, MrrError> {
        match self.report_utc_offset.as_deref() {
            None => Ok(ReportTimezone::Local),
            Some(raw) => raw
                .trim()
                .parse::<FixedOffset>()
                .map(ReportTimezone::Fixed)
                .map_err(|e| MrrError::InvalidOffset(format!("{raw}: {e}"))),
        }
    }
}

/// Civil timezone used when rendering pause-collection resume timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTimezone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl ReportTimezone {
    pub fn utc() -> Self {
        ReportTimezone::Fixed(Utc.fix())
    }

    /// Format a unix timestamp (seconds). Returns `None` when it is out of range.
    pub fn format_timestamp(&self, seconds: i64) -> Option<String> {
        let instant = DateTime::from_timestamp(seconds, 0)?;
        let rendered = match self {
            ReportTimezone::Local => instant
                .with_timezone(&Local)
                .format(RESUME_DATE_FORMAT)
                .to_string(),
            ReportTimezone::Fixed(offset) => instant
                .with_timezone(offset)
                .format(RESUME_DATE_FORMAT)
                .to_string(),
        };
        Some(rendered)
    }
}
