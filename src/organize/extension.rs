use std::path::Path;

/// Bucket name for a file's extension, including the leading dot. Files
/// without an extension have no bucket.
pub fn extension_bucket(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{ext}"))
}
