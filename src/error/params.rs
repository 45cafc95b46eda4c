use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("Malformed parameter '{entry}'. Expected 'key=value'.")]
    MalformedParameter { entry: String },
    #[error("Unknown capability '{value}'. Use invoke, state, or pubsub.")]
    UnknownCapability { value: String },
    #[error("Unknown target '{value}'. Use noop, dapr, or appcallback.")]
    UnknownTarget { value: String },
}
