//! In-memory filesystem adapter for tests.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chassis_core::application::ApplicationError;
use chassis_core::application::ports::Filesystem;
use chassis_core::error::{ChassisError, ChassisResult};

#[derive(Debug, Default)]
struct Inner {
    directories: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

/// Thread-safe in-memory filesystem.
///
/// Tracks presence only, not contents. Useful for exercising services
/// that probe directory layouts without touching the real disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory and all of its ancestors.
    pub fn add_dir(&self, path: impl Into<PathBuf>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            insert_dir_chain(&mut inner, &path.into());
        }
        self
    }

    /// Record a file, creating parent directories along the way.
    pub fn add_file(&self, path: impl Into<PathBuf>) -> &Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_dir_chain(&mut inner, parent);
            }
            inner.files.insert(path);
        }
        self
    }

    fn read(&self) -> ChassisResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| ChassisError::from(ApplicationError::StateLockPoisoned))
    }

    fn write(&self) -> ChassisResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| ChassisError::from(ApplicationError::StateLockPoisoned))
    }
}

fn insert_dir_chain(inner: &mut Inner, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        inner.directories.insert(ancestor.to_path_buf());
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path) || inner.files.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> ChassisResult<()> {
        let mut inner = self.write()?;
        insert_dir_chain(&mut inner, path);
        Ok(())
    }

    fn subdirs(&self, path: &Path) -> ChassisResult<Vec<String>> {
        let inner = self.read()?;
        let mut names: Vec<String> = inner
            .directories
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    fn is_empty_dir(&self, path: &Path) -> ChassisResult<bool> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "directory does not exist".to_string(),
            }
            .into());
        }
        let occupied = inner
            .directories
            .iter()
            .chain(inner.files.iter())
            .any(|entry| entry.parent() == Some(path));
        Ok(!occupied)
    }
}
