//! Thin entry points for the `fuzz/` targets.

use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};

use crate::args::{TesterArgs, parse_duration_arg};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::error::{AppError, AppResult, ConfigError};
use crate::params::parse_parameters;
use crate::resolver::{PreparedRequest, prepare};

/// Parses a duration argument (e.g. `250ms`, `2m`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Parses `input` as TOML config and applies it over default CLI args.
///
/// # Errors
///
/// Returns an error when the TOML is invalid or a value is rejected.
pub fn apply_config_from_toml(input: &str) -> AppResult<TesterArgs> {
    let config: ConfigFile = toml::from_str(input).map_err(|source| {
        AppError::config(ConfigError::ParseToml {
            path: "fuzz.toml".into(),
            source,
        })
    })?;
    let matches = TesterArgs::command().try_get_matches_from(["strest-dapr"])?;
    let mut args = TesterArgs::from_arg_matches(&matches)?;
    apply_config(&mut args, &matches, &config)?;
    Ok(args)
}

/// Parses `input` and prepares it without a channel, which only the `noop`
/// target accepts.
///
/// # Errors
///
/// Returns the parse or resolve error.
pub fn prepare_detached_input(input: &str, payload: &[u8]) -> AppResult<PreparedRequest> {
    let params = parse_parameters(input)?;
    let prepared = prepare(&params, payload, None)?;
    Ok(prepared.request().clone())
}
