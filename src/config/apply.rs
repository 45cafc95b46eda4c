use std::num::NonZeroU64;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

/// Fills every argument not given on the command line (or, for `--dapr`,
/// through its environment variable) from `config`.
///
/// # Errors
///
/// Returns an error when the config sets conflicting payload sources or an
/// invalid count or duration.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_explicit(matches, "dapr")
        && let Some(dapr) = config.dapr.clone()
    {
        args.dapr = Some(dapr);
    }

    apply_payload_config(args, matches, config)?;

    if !is_cli(matches, "requests")
        && let Some(requests) = config.requests
    {
        args.requests = NonZeroU64::new(requests).ok_or_else(|| {
            AppError::config(ConfigError::FieldMustBePositive { field: "requests" })
        })?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration("timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = timeout.to_duration("connect_timeout")?;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

fn apply_payload_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if config.payload.is_some() && config.payload_file.is_some() {
        return Err(AppError::config(ConfigError::Conflict {
            left: "payload",
            right: "payload_file",
        }));
    }
    if is_cli(matches, "payload") || is_cli(matches, "payload_file") {
        return Ok(());
    }
    if let Some(payload) = config.payload.clone() {
        args.payload = Some(payload);
    }
    if let Some(path) = config.payload_file.clone() {
        args.payload_file = Some(path);
    }
    Ok(())
}
