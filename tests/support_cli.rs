use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

/// Runs the `strest-dapr` binary in `workdir` with a quiet log level.
///
/// # Errors
///
/// Returns an error when the binary path is unknown or the process cannot be
/// spawned.
pub fn run_strest_dapr<I, S>(workdir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = strest_dapr_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(workdir)
        .env("RUST_LOG", "error")
        .env_remove("STREST_DAPR_LOG")
        .env_remove("STREST_DAPR_PARAMS")
        .output()
        .map_err(|err| format!("run strest-dapr failed: {}", err))
}

pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn strest_dapr_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_strest-dapr").map_or_else(
        || Err("CARGO_BIN_EXE_strest-dapr missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
