use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Missing dapr parameters (set --dapr or provide in config).")]
    MissingParameters,
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL must include a host.")]
    UrlMissingHost,
    #[error("Unsupported URL scheme '{scheme}'. Use http, https, grpc, or grpcs.")]
    UnsupportedUrlScheme { scheme: String },
    #[error("Cannot combine --payload with --payload-file.")]
    PayloadConflict,
    #[error("Failed to read payload file '{path}': {source}")]
    ReadPayloadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{failed} of {total} executions failed.")]
    RuntimeErrors { failed: u64, total: u64 },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
