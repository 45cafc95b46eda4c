use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::types::{ConfigFile, DurationValue};
use super::{apply_config, load_config, read_config};
use crate::args::TesterArgs;
use crate::error::{AppError, ConfigError};

fn parse_cli(raw: &[&str]) -> Result<(TesterArgs, clap::ArgMatches), String> {
    let matches = TesterArgs::command()
        .try_get_matches_from(raw)
        .map_err(|err| format!("Expected parse success: {}", err))?;
    let args = TesterArgs::from_arg_matches(&matches)
        .map_err(|err| format!("Expected args: {}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("strest-dapr.toml");
    let content = r#"
url = "grpc://127.0.0.1:50001"
dapr = "capability=state,target=dapr,method=get,store=statestore,key=k1"
requests = 500
timeout = "250ms"
connect_timeout = 3
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = read_config(&path).map_err(|err| err.to_string())?;
    if config.url.as_deref() != Some("grpc://127.0.0.1:50001") {
        return Err("Unexpected url".to_owned());
    }
    if config.requests != Some(500) {
        return Err("Unexpected requests".to_owned());
    }
    match config.timeout {
        Some(DurationValue::Text(ref text)) if text == "250ms" => {}
        other => return Err(format!("Unexpected timeout: {:?}", other)),
    }
    match config.connect_timeout {
        Some(DurationValue::Seconds(3)) => {}
        other => return Err(format!("Unexpected connect timeout: {:?}", other)),
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("strest-dapr.json");
    let content = r#"{
  "dapr": "capability=pubsub,target=dapr,method=publish,store=orders,topic=created",
  "payload": "{\"id\":1}",
  "verbose": true
}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let loaded = load_config(path.to_str())
        .map_err(|err| err.to_string())?
        .ok_or_else(|| "Expected config".to_owned())?;
    if loaded.path != path {
        return Err(format!("Unexpected config path: {}", loaded.path.display()));
    }
    let config = loaded.config;
    if config.payload.as_deref() != Some(r#"{"id":1}"#) || config.verbose != Some(true) {
        return Err("Unexpected payload/verbose".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_fields_and_extensions_are_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let unknown = dir.path().join("unknown.toml");
    std::fs::write(&unknown, "rate = 10\n").map_err(|err| format!("write failed: {}", err))?;
    if !matches!(
        read_config(&unknown),
        Err(ConfigError::ParseToml { .. })
    ) {
        return Err("Expected TOML parse error".to_owned());
    }

    let yaml = dir.path().join("config.yaml");
    std::fs::write(&yaml, "url: x\n").map_err(|err| format!("write failed: {}", err))?;
    if !matches!(
        read_config(&yaml),
        Err(ConfigError::UnsupportedExtension { .. })
    ) {
        return Err("Expected unsupported extension".to_owned());
    }

    let missing_yaml = dir.path().join("missing.yaml");
    if !matches!(
        read_config(&missing_yaml),
        Err(ConfigError::UnsupportedExtension { .. })
    ) {
        return Err("Extension must be checked before reading".to_owned());
    }
    Ok(())
}

#[test]
fn config_fills_values_not_given_on_cli() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["strest-dapr", "--requests", "7"])?;
    let config = ConfigFile {
        url: Some("grpc://localhost:50001".to_owned()),
        dapr: Some("target=noop".to_owned()),
        payload: Some("ping".to_owned()),
        requests: Some(100),
        timeout: Some(DurationValue::Text("2s".to_owned())),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.url.as_deref() != Some("grpc://localhost:50001") {
        return Err("Expected url from config".to_owned());
    }
    if args.dapr.as_deref() != Some("target=noop") || args.payload.as_deref() != Some("ping") {
        return Err("Expected dapr/payload from config".to_owned());
    }
    if args.requests.get() != 7 {
        return Err(format!("CLI requests must win, got {}", args.requests));
    }
    if args.request_timeout != Duration::from_secs(2) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    Ok(())
}

#[test]
fn cli_payload_shadows_config_payload_file() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["strest-dapr", "--payload", "inline"])?;
    let config = ConfigFile {
        payload_file: Some("body.json".to_owned()),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;
    if args.payload_file.is_some() || args.payload.as_deref() != Some("inline") {
        return Err("CLI payload must win over config payload_file".to_owned());
    }
    Ok(())
}

#[test]
fn invalid_config_values_are_rejected() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["strest-dapr"])?;

    let both_payloads = ConfigFile {
        payload: Some("a".to_owned()),
        payload_file: Some("b".to_owned()),
        ..ConfigFile::default()
    };
    if !matches!(
        apply_config(&mut args, &matches, &both_payloads),
        Err(AppError::Config(ConfigError::Conflict { .. }))
    ) {
        return Err("Expected payload conflict".to_owned());
    }

    let zero_requests = ConfigFile {
        requests: Some(0),
        ..ConfigFile::default()
    };
    if !matches!(
        apply_config(&mut args, &matches, &zero_requests),
        Err(AppError::Config(ConfigError::FieldMustBePositive { field: "requests" }))
    ) {
        return Err("Expected positive requests error".to_owned());
    }

    let bad_timeout = ConfigFile {
        timeout: Some(DurationValue::Text("soon".to_owned())),
        ..ConfigFile::default()
    };
    if !matches!(
        apply_config(&mut args, &matches, &bad_timeout),
        Err(AppError::Config(ConfigError::InvalidDuration { field: "timeout", .. }))
    ) {
        return Err("Expected invalid timeout error".to_owned());
    }
    Ok(())
}
