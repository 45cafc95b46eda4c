use thiserror::Error;

use super::{ConfigError, ParamError, RemoteError, ResolveError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Parameter error: {0}")]
    Param(#[from] ParamError),
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),
    #[error("Remote call failed: {0}")]
    Remote(#[from] RemoteError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn remote<E>(error: E) -> Self
    where
        E: Into<RemoteError>,
    {
        error.into().into()
    }
}
