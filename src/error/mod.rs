mod app;
mod config;
mod params;
mod remote;
mod resolve;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use params::ParamError;
pub use remote::RemoteError;
pub use resolve::ResolveError;
pub use validation::ValidationError;
