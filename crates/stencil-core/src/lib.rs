//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stencil, a
//! generator of NestJS CRUD services. Given an entity name and a scaffold
//! kind it produces a deterministic set of text artifacts (paths + content).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldEngine, CatalogService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (ArtifactRegistry, ArtifactWriter)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stencil-adapters (Infrastructure)   │
//! │ (BuiltinRegistry, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameBundle, ArtifactSetSpec, Result)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stencil_core::prelude::*;
//!
//! let engine = ScaffoldEngine::new(Box::new(registry));
//! let result = engine.generate("teste", ScaffoldKind::NewCrudModule, &RenderContext::new())?;
//! engine.write(&result, "./apps/teste".as_ref(), &filesystem, false)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, KindInfo, ScaffoldEngine,
        ports::{ArtifactRegistry, ArtifactWriter},
    };
    pub use crate::domain::{
        Artifact, ArtifactSetSpec, GenerationResult, Member, NameBundle, RelativePath,
        RenderContext, ScaffoldKind, TemplateSpec,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
