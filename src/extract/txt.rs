use std::fs;
use std::path::Path;

use crate::error::ExtractError;

pub(super) fn extract(path: &Path) -> Result<String, ExtractError> {
    fs::read_to_string(path).map_err(|e| ExtractError::read_error(path, e))
}
