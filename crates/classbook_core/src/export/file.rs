//! CSV file save.

use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File-save failure for an export.
#[derive(Debug)]
pub enum ExportError {
    /// Target file name is blank or contains a path separator.
    InvalidFileName(String),
    /// Directory creation or file write failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFileName(name) => write!(f, "invalid export file name `{name}`"),
            Self::Io { path, source } => {
                write!(f, "failed to write export `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFileName(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Writes `contents` to `dir/file_name`, creating `dir` when missing.
///
/// Returns the written path.
///
/// # Errors
/// - `InvalidFileName` when `file_name` is blank or not a bare file name.
/// - `Io` when the directory or file cannot be written.
pub fn write_csv_file(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    let trimmed = file_name.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }

    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(trimmed);
    if let Err(source) = std::fs::write(&path, contents) {
        error!(
            "event=export_write module=export status=error file={} err={}",
            trimmed, source
        );
        return Err(ExportError::Io { path, source });
    }

    info!(
        "event=export_write module=export status=ok file={} bytes={}",
        trimmed,
        contents.len()
    );
    Ok(path)
}
