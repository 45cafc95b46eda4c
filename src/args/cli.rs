use std::num::NonZeroU64;
use std::time::Duration;

use clap::Parser;

use super::parsers::{parse_duration_arg, parse_positive_u64};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Dapr gRPC load driver - prepares one invoke, state, or pub/sub request from flat key=value parameters and fires it repeatedly."
)]
pub struct TesterArgs {
    /// gRPC endpoint of the Dapr sidecar or app (http, https, grpc, grpcs)
    #[arg(long, short)]
    pub url: Option<String>,

    /// Load-test parameters, e.g. capability=state,target=dapr,method=get,store=statestore,key=k1
    #[arg(long = "dapr", env = "STREST_DAPR_PARAMS")]
    pub dapr: Option<String>,

    /// Request payload sent verbatim with invoke and publish
    #[arg(long = "payload", short = 'd', conflicts_with = "payload_file")]
    pub payload: Option<String>,

    /// Read the request payload from a file
    #[arg(long = "payload-file", short = 'D')]
    pub payload_file: Option<String>,

    /// Number of calls to issue, one after another
    #[arg(long = "requests", short = 'n', default_value = "1", value_parser = parse_positive_u64)]
    pub requests: NonZeroU64,

    /// Per-call timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "10s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Connection timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Path to a TOML or JSON config file (defaults to strest-dapr.toml/.json)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
