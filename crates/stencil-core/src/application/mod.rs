//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldEngine, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Naming and
//! composition rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    KindInfo, // DTO for registry listings
    ScaffoldEngine,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactRegistry, ArtifactWriter};

pub use error::ApplicationError;
