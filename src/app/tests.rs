use std::future::Future;

use clap::Parser;
use tempfile::tempdir;

use super::*;
use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ResolveError, ValidationError};
use crate::params::Capability;
use crate::shutdown::stop_channel;

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(format!("Failed to build runtime: {}", err)))?;
    runtime.block_on(future)
}

fn parse_args(extra: &[&str]) -> AppResult<TesterArgs> {
    let mut raw = vec!["strest-dapr"];
    raw.extend_from_slice(extra);
    TesterArgs::try_parse_from(raw)
        .map_err(|err| AppError::validation(format!("Expected parse success: {}", err)))
}

#[test]
fn payload_defaults_to_empty_bytes() -> AppResult<()> {
    let args = parse_args(&[])?;
    if !load_payload(&args)?.is_empty() {
        return Err(AppError::validation("Expected empty payload"));
    }
    Ok(())
}

#[test]
fn payload_is_read_verbatim_from_file() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("body.json");
    std::fs::write(&path, b"{\"id\":1}\n")?;
    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::validation("Temp path is not UTF-8"))?;

    let args = parse_args(&["--payload-file", path_str])?;
    if load_payload(&args)? != b"{\"id\":1}\n" {
        return Err(AppError::validation("Unexpected payload bytes"));
    }

    let missing = parse_args(&["--payload-file", "/definitely/not/here.bin"])?;
    if !matches!(
        load_payload(&missing),
        Err(AppError::Validation(ValidationError::ReadPayloadFile { .. }))
    ) {
        return Err(AppError::validation("Expected read error"));
    }
    Ok(())
}

#[test]
fn noop_run_completes_every_request_without_url() -> AppResult<()> {
    run_async_test(async {
        let args = parse_args(&["--dapr", "capability=invoke,target=noop", "-n", "25"])?;
        let (_stop_tx, mut stop) = stop_channel();

        let outcome = run_local(&args, &mut stop).await?;
        let expected = RunOutcome {
            total: 25,
            failed: 0,
            interrupted: false,
        };
        if outcome != expected {
            return Err(AppError::validation(format!(
                "Unexpected outcome: {:?}",
                outcome
            )));
        }
        Ok(())
    })
}

#[test]
fn run_stops_once_stop_is_requested() -> AppResult<()> {
    run_async_test(async {
        let args = parse_args(&["--dapr", "target=noop", "-n", "1000"])?;
        let (stop_tx, mut stop) = stop_channel();
        stop_tx.send_replace(true);

        let outcome = run_local(&args, &mut stop).await?;
        if !outcome.interrupted || outcome.total != 0 {
            return Err(AppError::validation(format!(
                "Expected interrupted run, got {:?}",
                outcome
            )));
        }
        Ok(())
    })
}

#[test]
fn remote_target_requires_url_and_parameters() -> AppResult<()> {
    run_async_test(async {
        let (_stop_tx, mut stop) = stop_channel();

        let without_url = parse_args(&["--dapr", "capability=invoke,target=dapr,method=ping"])?;
        if !matches!(
            run_local(&without_url, &mut stop).await,
            Err(AppError::Validation(ValidationError::MissingUrl))
        ) {
            return Err(AppError::validation("Expected missing url"));
        }

        let without_method = parse_args(&["--dapr", "capability=invoke,target=dapr"])?;
        if !matches!(
            run_local(&without_method, &mut stop).await,
            Err(AppError::Resolve(ResolveError::MissingField {
                capability: Capability::Invoke,
                field: "method",
            }))
        ) {
            return Err(AppError::validation(
                "Missing method must be reported before missing url",
            ));
        }

        let without_params = parse_args(&["--url", "grpc://127.0.0.1:50001"])?;
        if !matches!(
            run_local(&without_params, &mut stop).await,
            Err(AppError::Validation(ValidationError::MissingParameters))
        ) {
            return Err(AppError::validation("Expected missing parameters"));
        }
        Ok(())
    })
}

#[test]
fn invalid_parameters_fail_before_any_call() -> AppResult<()> {
    run_async_test(async {
        let (_stop_tx, mut stop) = stop_channel();
        let args = parse_args(&[
            "--url",
            "grpc://127.0.0.1:1",
            "--dapr",
            "capability=state,target=appcallback,method=get",
        ])?;
        if !matches!(
            run_local(&args, &mut stop).await,
            Err(AppError::Resolve(_))
        ) {
            return Err(AppError::validation("Expected resolve error"));
        }

        let without_url = parse_args(&["--dapr", "capability=pubsub,target=appcallback"])?;
        if !matches!(
            run_local(&without_url, &mut stop).await,
            Err(AppError::Resolve(ResolveError::UnsupportedCombination { .. }))
        ) {
            return Err(AppError::validation("Expected unsupported combination"));
        }
        Ok(())
    })
}

#[test]
fn unreachable_endpoint_counts_failures() -> AppResult<()> {
    run_async_test(async {
        let (_stop_tx, mut stop) = stop_channel();
        let args = parse_args(&[
            "--url",
            "grpc://127.0.0.1:1",
            "--dapr",
            "capability=invoke,target=dapr,method=ping,appid=echo",
            "-n",
            "2",
            "--connect-timeout",
            "200ms",
            "--timeout",
            "500ms",
        ])?;

        let outcome = run_local(&args, &mut stop).await?;
        if outcome.total != 2 || outcome.failed != 2 {
            return Err(AppError::validation(format!(
                "Expected two failed calls, got {:?}",
                outcome
            )));
        }
        Ok(())
    })
}
