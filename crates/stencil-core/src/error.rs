//! Unified error handling for Stencil Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stencil Core operations.
#[derive(Debug, Error, Clone)]
pub enum StencilError {
    /// Errors from the domain layer (naming and composition rules).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StencilError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stencil".into(),
                "Please report this issue at: https://github.com/stencil-rs/stencil/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for a bad entity name.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidName { .. }))
    }

    /// `true` when the requested kind is unknown or not registered.
    pub fn is_unknown_kind(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::UnknownScaffoldKind { .. })
                | Self::Application(ApplicationError::KindNotRegistered { .. })
        )
    }

    /// `true` when two members target the same path.
    pub fn is_duplicate_path(&self) -> bool {
        matches!(self, Self::Domain(DomainError::DuplicateArtifactPath { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StencilResult<T> = Result<T, StencilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_covers_both_layers() {
        let parsed: StencilError = DomainError::UnknownScaffoldKind { kind: "x".into() }.into();
        let missing: StencilError = ApplicationError::KindNotRegistered { kind: "crud".into() }.into();

        assert!(parsed.is_unknown_kind());
        assert!(missing.is_unknown_kind());
        assert_eq!(parsed.category(), ErrorCategory::NotFound);
        assert_eq!(missing.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn invalid_name_maps_to_validation() {
        let err: StencilError = DomainError::InvalidName {
            name: "".into(),
            reason: "name cannot be empty".into(),
        }
        .into();
        assert!(err.is_invalid_name());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
