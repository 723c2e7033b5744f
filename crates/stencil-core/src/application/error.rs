//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming or
//! composition rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The registry has no artifact set for a valid kind.
    #[error("no artifact set registered for kind '{kind}'")]
    KindNotRegistered { kind: String },

    /// Writer operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Output root already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A generated file would replace one already on disk.
    #[error("File already exists at {path}")]
    ArtifactExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::KindNotRegistered { kind } => vec![
                format!("'{}' is a known kind but this registry does not provide it", kind),
                "Try: stencil list to see registered kinds".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to write into it anyway (files may be overwritten)".into(),
                "Choose a different output directory".into(),
            ],
            Self::ArtifactExists { path } => vec![
                format!("Refusing to replace {}", path.display()),
                "Use --force to overwrite existing files".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Partially written files may remain in {}", path.display()),
                "Remove the directory by hand before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::KindNotRegistered { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } | Self::ArtifactExists { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
