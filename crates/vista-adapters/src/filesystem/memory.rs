//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use vista_core::{
    application::{ApplicationError, ports::Filesystem},
    error::VistaResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can keep a handle after boxing
/// one into the view adapter.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashSet<PathBuf>,
    directories: HashSet<PathBuf>,
    read_only: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Register a file (and its parent directories).
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf());
        }
    }

    /// Make every later `create_dir_all` fail.
    pub fn set_read_only(&self, read_only: bool) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only = read_only;
        }
    }

    /// List all directories.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> VistaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.read_only {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Read-only filesystem".into(),
            }
            .into());
        }

        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }
}

fn insert_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_registers_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/app/view/index/index.html");

        assert!(fs.is_file(Path::new("/app/view/index/index.html")));
        assert!(fs.is_dir(Path::new("/app/view/index")));
        assert!(!fs.is_file(Path::new("/app/view/index")));
    }

    #[test]
    fn create_dir_all_records_every_level() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("runtime/temp")).unwrap();
        assert!(fs.is_dir(Path::new("runtime")));
        assert!(fs.is_dir(Path::new("runtime/temp")));
    }

    #[test]
    fn read_only_rejects_directory_creation() {
        let fs = MemoryFilesystem::new();
        fs.set_read_only(true);
        assert!(fs.create_dir_all(Path::new("cache")).is_err());
        assert!(fs.list_directories().is_empty());
    }
}
