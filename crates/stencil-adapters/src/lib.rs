//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`:
//! the built-in artifact-set registry (all TypeScript templates live here)
//! and the filesystem writers.

pub mod filesystem;
pub mod registry;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::{BUILTIN_SETS, BuiltinRegistry};
