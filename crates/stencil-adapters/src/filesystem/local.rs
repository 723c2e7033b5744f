//! Local filesystem writer using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use stencil_core::{
    application::{ApplicationError, ports::ArtifactWriter},
    error::{StencilError, StencilResult},
};

/// Production writer backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactWriter for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> StencilResult<()> {
        debug!(path = %path.display(), "Removing directory");
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StencilError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_removes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("apps/dog");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&root.join("src")).unwrap();
        fs.write_file(&root.join("src/main.ts"), "bootstrap();\n").unwrap();

        assert!(fs.exists(&root));
        assert_eq!(
            std::fs::read_to_string(root.join("src/main.ts")).unwrap(),
            "bootstrap();\n"
        );

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&dir.path().join("nope/file.ts"), "")
            .unwrap_err();

        assert!(matches!(
            err,
            StencilError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
