//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use crate::domain::{ArtifactSetSpec, ScaffoldKind};
use crate::error::StencilResult;
use std::path::Path;

/// Port for artifact-set lookup.
///
/// Implemented by:
/// - `stencil_adapters::registry::BuiltinRegistry` (compiled-in templates)
///
/// ## Design Notes
///
/// - Read-only: populated before the first lookup, never mutated after
/// - Specs are `Copy` (all `'static` data) so lookups return them by value
pub trait ArtifactRegistry: Send + Sync {
    /// The artifact set registered for `kind`, if any.
    fn resolve(&self, kind: ScaffoldKind) -> Option<ArtifactSetSpec>;

    /// Every registered kind, in registration order.
    fn kinds(&self) -> Vec<ScaffoldKind>;
}

/// Port for persisting generated artifacts.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactWriter: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StencilResult<()>;
}
