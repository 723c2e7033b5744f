// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stencil.
//!
//! This module contains pure scaffolding logic with no I/O. Writing files and
//! storing templates are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: NameBundle and RenderContext never change once built
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact_set::{ArtifactSetSpec, Member},
    common::RelativePath,
    generation::{Artifact, GenerationResult},
    template::{RenderContext, RenderFn, TemplateSpec},
};

pub use error::{DomainError, ErrorCategory};
pub use naming::NameBundle;
pub use value_objects::ScaffoldKind;

pub use validation::DomainValidator;
