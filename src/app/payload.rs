use crate::args::TesterArgs;
use crate::error::{AppError, AppResult, ValidationError};

/// Request body bytes from `--payload` or `--payload-file`; empty when
/// neither is set.
pub(crate) fn load_payload(args: &TesterArgs) -> AppResult<Vec<u8>> {
    match (args.payload.as_deref(), args.payload_file.as_deref()) {
        (Some(_), Some(_)) => Err(AppError::validation(ValidationError::PayloadConflict)),
        (Some(inline), None) => Ok(inline.as_bytes().to_vec()),
        (None, Some(path)) => std::fs::read(path).map_err(|source| {
            AppError::validation(ValidationError::ReadPayloadFile {
                path: path.to_owned(),
                source,
            })
        }),
        (None, None) => Ok(Vec::new()),
    }
}
