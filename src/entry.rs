use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::run_local;
use crate::args::TesterArgs;
use crate::config::{apply_config, find_default_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};
use crate::shutdown::stop_channel;

pub(crate) fn run() -> AppResult<()> {
    let Some((mut args, matches)) = parse_args()? else {
        return Ok(());
    };

    let loaded = load_config(args.config.as_deref())?;
    if let Some(loaded) = loaded.as_ref() {
        apply_config(&mut args, &matches, &loaded.config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);
    if let Some(loaded) = loaded {
        tracing::debug!("Using config {}", loaded.path.display());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<Option<(TesterArgs, ArgMatches)>> {
    let mut cmd = TesterArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    let from_env = std::env::var_os("STREST_DAPR_PARAMS").is_some();
    !from_env && find_default_config().is_none()
}

async fn run_async(args: TesterArgs) -> AppResult<()> {
    let (_stop_tx, mut stop) = stop_channel();
    let outcome = run_local(&args, &mut stop).await?;
    if outcome.failed > 0 {
        tracing::error!("{} of {} calls failed.", outcome.failed, outcome.total);
        return Err(AppError::validation(ValidationError::RuntimeErrors {
            failed: outcome.failed,
            total: outcome.total,
        }));
    }
    Ok(())
}
