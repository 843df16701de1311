//! File download of a code artifact.

use std::path::{Path, PathBuf};

use super::ExportError;

/// Write `code` to `dir/file_name`, creating `dir` when missing.
///
/// An existing file of the same name is overwritten.  Returns the full path.
pub fn write_artifact(dir: &Path, file_name: &str, code: &str) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    std::fs::write(&path, code).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    log::info!("export: wrote {} bytes to {}", code.len(), path.display());
    Ok(path)
}
