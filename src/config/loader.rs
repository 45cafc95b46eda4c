use std::path::{Path, PathBuf};

use crate::error::{AppResult, ConfigError};

use super::types::ConfigFile;

/// Looked up in the working directory, in order, when `--config` is absent.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["strest-dapr.toml", "strest-dapr.json"];

/// A parsed config file and where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: ConfigFile,
}

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }
}

/// First default config file present in the working directory.
#[must_use]
pub fn find_default_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Loads `explicit` when given, otherwise the first default config file.
///
/// # Errors
///
/// Returns an error when the file has an unknown extension, cannot be read,
/// or does not parse.
pub fn load_config(explicit: Option<&str>) -> AppResult<Option<LoadedConfig>> {
    let Some(path) = explicit.map(PathBuf::from).or_else(find_default_config) else {
        return Ok(None);
    };
    let config = read_config(&path)?;
    Ok(Some(LoadedConfig { path, config }))
}

pub(crate) fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let format = ConfigFormat::for_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    match format {
        ConfigFormat::Toml => toml::from_str(&content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Json => {
            serde_json::from_str(&content).map_err(|source| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
