use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Failed to build gRPC client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid gRPC method path '{path}': {source}")]
    InvalidMethodPath {
        path: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} returned HTTP status {status}")]
    HttpStatus { path: &'static str, status: u16 },
    #[error("{path} returned grpc-status {code}: {message}")]
    GrpcStatus {
        path: &'static str,
        code: String,
        message: String,
    },
    #[error("{path} returned no response message and no grpc-status header")]
    MissingResponseMessage { path: &'static str },
    #[error("{path} timed out after {timeout:?}")]
    Timeout {
        path: &'static str,
        timeout: Duration,
    },
}
