use std::sync::Arc;

use tracing::{debug, info};

use crate::args::TesterArgs;
use crate::dapr::{GrpcChannel, HttpGrpcChannel};
use crate::error::{AppError, AppResult, ResolveError, ValidationError};
use crate::params::{ParameterSet, parse_parameters};
use crate::resolver::{PreparedCall, execute, prepare};
use crate::shutdown::StopSignal;

use super::payload::load_payload;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RunOutcome {
    pub(crate) total: u64,
    pub(crate) failed: u64,
    pub(crate) interrupted: bool,
}

pub(crate) async fn run_local(args: &TesterArgs, stop: &mut StopSignal) -> AppResult<RunOutcome> {
    let raw = args
        .dapr
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingParameters))?;
    let params = parse_parameters(raw)?;
    let payload = load_payload(args)?;
    let prepared = prepare_with_channel(args, &params, &payload)?;

    info!(
        "Prepared dapr load test: {} ({} bytes payload, {} requests)",
        params,
        payload.len(),
        args.requests
    );

    let outcome = run_prepared(&params, &prepared, args.requests.get(), stop).await;

    info!(
        "Finished: {} calls, {} failed{}",
        outcome.total,
        outcome.failed,
        if outcome.interrupted {
            " (interrupted)"
        } else {
            ""
        }
    );
    Ok(outcome)
}

/// Prepares without a channel first, so the pair and its required fields
/// are checked before `--url` is. Only a remote target that asks for a
/// channel gets one.
fn prepare_with_channel(
    args: &TesterArgs,
    params: &ParameterSet,
    payload: &[u8],
) -> AppResult<PreparedCall> {
    match prepare(params, payload, None) {
        Err(ResolveError::MissingChannel { target }) => {
            let channel = build_channel(args)?;
            debug!("Binding {} stub to the gRPC channel", target);
            prepare(params, payload, Some(&channel)).map_err(AppError::from)
        }
        detached => detached.map_err(AppError::from),
    }
}

fn build_channel(args: &TesterArgs) -> AppResult<Arc<dyn GrpcChannel>> {
    let url = args
        .url
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let channel = HttpGrpcChannel::new(url, args.connect_timeout, args.request_timeout)?;
    debug!("gRPC channel targets {}", channel.base_url());
    Ok(Arc::new(channel))
}

async fn run_prepared(
    params: &ParameterSet,
    prepared: &PreparedCall,
    requests: u64,
    stop: &mut StopSignal,
) -> RunOutcome {
    let mut outcome = RunOutcome::default();
    for _ in 0..requests {
        let result = tokio::select! {
            biased;
            () = stop.stopped() => {
                outcome.interrupted = true;
                break;
            }
            result = execute(params, prepared) => result,
        };
        outcome.total = outcome.total.saturating_add(1);
        if let Err(err) = result {
            outcome.failed = outcome.failed.saturating_add(1);
            debug!("Call {} failed: {}", outcome.total, err);
        }
    }
    outcome
}
