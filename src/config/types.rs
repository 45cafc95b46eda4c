use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;
use crate::error::{AppError, AppResult, ConfigError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    /// Flat `key=value,...` load-test parameters.
    pub dapr: Option<String>,
    pub payload: Option<String>,
    pub payload_file: Option<String>,
    pub requests: Option<u64>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either whole seconds or a duration string such as `"750ms"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &'static str) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(AppError::config(ConfigError::FieldMustBePositive { field }))
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text).map_err(|err| match err {
                AppError::Validation(source) => {
                    AppError::config(ConfigError::InvalidDuration { field, source })
                }
                other @ (AppError::Io { .. }
                | AppError::Clap { .. }
                | AppError::Param(_)
                | AppError::Resolve(_)
                | AppError::Remote(_)
                | AppError::Config(_)) => other,
            }),
        }
    }
}
