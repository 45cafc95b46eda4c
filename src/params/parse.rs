use crate::error::ParamError;

use super::types::ParameterSet;

/// Parses a flat `key=value,key=value` string into a [`ParameterSet`].
///
/// Entries are split on the first `=` and both sides are trimmed. The keys
/// `capability`, `target`, `method`, `appid` and `store` fill the named
/// fields; every other key lands in the extension map. A repeated key keeps
/// its last value. Nothing is required at this stage.
///
/// # Errors
///
/// Returns `MalformedParameter` for an entry without `=` (a blank entry
/// included), and `UnknownCapability`/`UnknownTarget` when those keys carry a
/// non-empty value that names no known variant.
pub fn parse_parameters(raw: &str) -> Result<ParameterSet, ParamError> {
    let mut params = ParameterSet::default();

    for entry in raw.split(',') {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| ParamError::MalformedParameter {
                entry: entry.trim().to_owned(),
            })?;
        let key = key.trim();
        let value = value.trim();

        match key {
            "capability" => {
                params.capability = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            "target" => {
                params.target = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            "method" => value.clone_into(&mut params.method),
            "appid" => value.clone_into(&mut params.app_id),
            "store" => value.clone_into(&mut params.store),
            other => {
                params.extensions.insert(other.to_owned(), value.to_owned());
            }
        }
    }

    Ok(params)
}
