//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a CRUD module" or "list kinds".

pub mod catalog_service;
pub mod scaffold_engine;

pub use catalog_service::{CatalogService, KindInfo};
pub use scaffold_engine::ScaffoldEngine;
