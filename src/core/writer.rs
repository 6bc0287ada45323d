//! DS-005: Output writer — directory creation and YAML emission.
//!
//! Each call stands alone: directories are created with `create_dir_all`
//! (existing ones are fine) and files are created or truncated. Nothing is
//! ever removed, so files from earlier runs with different contents remain.

use super::error::{Result, SplitError};
use super::types::Resource;
use serde::Serialize;
use std::path::Path;

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| SplitError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Serialize `contents` as YAML and write it to `path`, replacing any
/// existing file. Contents are encoded before the file is touched, so an
/// encoding failure leaves the target as it was.
pub fn write_yaml<T: Serialize + ?Sized>(path: &Path, contents: &T) -> Result<()> {
    let yaml = serde_yaml_ng::to_string(contents).map_err(|source| SplitError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, yaml).map_err(|source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one resource's contents to `path`.
pub fn write_resource(path: &Path, resource: &Resource<'_>) -> Result<()> {
    write_yaml(path, resource.contents)
}
