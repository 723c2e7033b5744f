//! In-memory writer for tests and `--dry-run` previews.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{ApplicationError, ports::ArtifactWriter},
    error::{StencilError, StencilResult},
};

/// In-memory filesystem. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().map(|inner| inner.files.len()).unwrap_or(0)
    }
}

fn lock_poisoned() -> StencilError {
    StencilError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl ArtifactWriter for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> StencilResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/a.ts"), "a").is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/a.ts"), "a").unwrap();
        assert_eq!(fs.read_file(Path::new("/out/a.ts")).as_deref(), Some("a"));
    }

    #[test]
    fn remove_clears_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/x")).unwrap();
        fs.create_dir_all(Path::new("/keep")).unwrap();
        fs.write_file(Path::new("/out/x/a.ts"), "a").unwrap();
        fs.write_file(Path::new("/keep/b.ts"), "b").unwrap();

        fs.remove_dir_all(Path::new("/out")).unwrap();

        assert!(!fs.exists(Path::new("/out")));
        assert!(!fs.exists(Path::new("/out/x")));
        assert_eq!(fs.list_files(), vec![PathBuf::from("/keep/b.ts")]);
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        clone.create_dir_all(Path::new("d")).unwrap();
        clone.write_file(Path::new("d/f"), "x").unwrap();
        assert_eq!(fs.file_count(), 1);
    }
}
