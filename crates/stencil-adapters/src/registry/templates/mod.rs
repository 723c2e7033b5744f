//! Built-in template functions, one module per artifact set.
//!
//! Each function is a [`stencil_core::domain::RenderFn`].

pub mod crud;
pub mod health;
pub mod legacy;
pub mod project;
