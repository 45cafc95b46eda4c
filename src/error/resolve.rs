use thiserror::Error;

use crate::params::{Capability, Target};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{field} is required for {capability} load test")]
    MissingField {
        capability: Capability,
        field: &'static str,
    },
    #[error("Unsupported method of {capability} load test: method={method}")]
    UnsupportedMethod {
        capability: Capability,
        method: String,
    },
    #[error("Unsupported dapr load test: capability={capability}, target={target}")]
    UnsupportedCombination { capability: String, target: String },
    #[error("Target '{target}' needs a gRPC channel, but none was supplied.")]
    MissingChannel { target: Target },
}

impl ResolveError {
    pub(crate) fn unsupported(capability: Option<Capability>, target: Option<Target>) -> Self {
        ResolveError::UnsupportedCombination {
            capability: capability.map_or("<unset>", Capability::as_str).to_owned(),
            target: target.map_or("<unset>", Target::as_str).to_owned(),
        }
    }
}
