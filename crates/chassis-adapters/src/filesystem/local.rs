//! Local filesystem adapter backed by `std::fs`.

use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;

use chassis_core::application::ApplicationError;
use chassis_core::application::ports::Filesystem;
use chassis_core::error::{ChassisError, ChassisResult};

/// Production filesystem adapter.
///
/// All failures surface as [`ApplicationError::FilesystemError`] with the
/// offending path attached, so callers never lose track of where an
/// operation went wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn map_io_error(path: &Path, err: io::Error) -> ChassisError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
    .into()
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> ChassisResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn subdirs(&self, path: &Path) -> ChassisResult<Vec<String>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| map_io_error(path, e))? {
            let entry = entry.map_err(|e| map_io_error(path, e))?;
            let file_type = entry.file_type().map_err(|e| map_io_error(path, e))?;
            if file_type.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn is_empty_dir(&self, path: &Path) -> ChassisResult<bool> {
        let mut entries = fs::read_dir(path).map_err(|e| map_io_error(path, e))?;
        Ok(entries.next().is_none())
    }
}
