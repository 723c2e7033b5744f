// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the engine never retries, but callers may stash them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("unknown scaffold kind '{kind}'")]
    UnknownScaffoldKind { kind: String },

    // ========================================================================
    // Registry misconfiguration (bugs, never user input)
    // ========================================================================
    #[error("artifact set '{kind}' produces '{path}' more than once")]
    DuplicateArtifactPath { kind: String, path: String },

    #[error("artifact set '{kind}' includes itself through '{chain}'")]
    CyclicInclude { kind: String, chain: String },
}

impl DomainError {
    /// Shorthand used by the name validator.
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used as an entity name: {}", name, reason),
                "Use ASCII letters and digits only, starting with a letter".into(),
                "Examples: teste, dog, invoiceItem".into(),
            ],
            Self::UnknownScaffoldKind { kind } => vec![
                format!("'{}' is not a scaffold kind", kind),
                "Supported kinds: app, legacy-app, crud, health".into(),
                "Try: stencil list".into(),
            ],
            Self::DuplicateArtifactPath { kind, path } => vec![
                format!("Two members of '{}' both target '{}'", kind, path),
                "This is a bug in the built-in registry, please report it".into(),
            ],
            Self::CyclicInclude { kind, .. } => vec![
                format!("'{}' includes itself", kind),
                "This is a bug in the built-in registry, please report it".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute", path),
                "Artifact paths must be relative to the output root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::UnknownScaffoldKind { .. } => ErrorCategory::NotFound,
            Self::DuplicateArtifactPath { .. }
            | Self::CyclicInclude { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_is_validation() {
        let err = DomainError::invalid_name("", "name cannot be empty");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("name cannot be empty"));
    }

    #[test]
    fn registry_bugs_are_internal() {
        let dup = DomainError::DuplicateArtifactPath {
            kind: "crud".into(),
            path: "modules/x/controller.ts".into(),
        };
        assert_eq!(dup.category(), ErrorCategory::Internal);
        assert!(dup.suggestions().iter().any(|s| s.contains("bug")));
    }

    #[test]
    fn unknown_kind_lists_supported() {
        let err = DomainError::UnknownScaffoldKind {
            kind: "lambda".into(),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("crud")));
    }
}
