mod support_cli;

use std::fs;

use tempfile::tempdir;

use support_cli::{describe, run_strest_dapr};

#[test]
fn e2e_noop_run_succeeds_without_endpoint() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_strest_dapr(
        dir.path(),
        ["--dapr", "capability=invoke,target=noop", "--requests", "50"],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_config_file_supplies_parameters() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = dir.path().join("strest-dapr.toml");
    fs::write(
        &config,
        "dapr = \"capability=state,target=noop\"\nrequests = 10\ntimeout = \"1s\"\n",
    )
    .map_err(|err| format!("write config failed: {}", err))?;

    let no_args: [&str; 0] = [];
    let output = run_strest_dapr(dir.path(), no_args)?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_malformed_parameters_fail() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_strest_dapr(dir.path(), ["--dapr", "capability=invoke,target"])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if !String::from_utf8_lossy(&output.stderr).contains("MalformedParameter") {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_unsupported_combination_fails_before_connecting() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_strest_dapr(
        dir.path(),
        [
            "--url",
            "grpc://127.0.0.1:1",
            "--dapr",
            "capability=pubsub,target=appcallback,method=publish",
        ],
    )?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if !String::from_utf8_lossy(&output.stderr).contains("UnsupportedCombination") {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_unreachable_endpoint_reports_runtime_errors() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_strest_dapr(
        dir.path(),
        [
            "--url",
            "grpc://127.0.0.1:1",
            "--dapr",
            "capability=invoke,target=dapr,method=ping,appid=echo",
            "--requests",
            "2",
            "--connect-timeout",
            "200ms",
            "--timeout",
            "500ms",
        ],
    )?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if !String::from_utf8_lossy(&output.stderr).contains("RuntimeErrors") {
        return Err(describe(&output));
    }
    Ok(())
}
