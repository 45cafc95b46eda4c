mod apply;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::{LoadedConfig, find_default_config, load_config};
#[cfg(test)]
pub(crate) use loader::read_config;
