//! Template specifications and their render context.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Template Domain                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  TemplateSpec (Value Object)                                 │
//! │  ├── id        "crud/controller"                             │
//! │  └── render    fn(&NameBundle, &RenderContext) -> String     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                                │
//! │  └── project_root_name   "dog" -> apps/dog/package.json      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why plain `fn` pointers?
//!
//! Templates are typed Rust functions rather than strings with placeholder
//! syntax. A function pointer is `Copy`, `Send + Sync` and usable inside a
//! `static`, so the whole registry is compile-time data with no
//! initialisation order to get wrong. Each function receives the single
//! [`NameBundle`] of the run and reads casing from it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::naming::NameBundle;

/// Signature shared by every template.
pub type RenderFn = fn(&NameBundle, &RenderContext) -> String;

/// A named, parameterized text producer.
///
/// Stateless and reusable across invocations. Rendering twice with equal
/// inputs yields byte-identical output.
#[derive(Clone, Copy)]
pub struct TemplateSpec {
    /// Stable identifier, `<set>/<file>` by convention.
    pub id: &'static str,
    pub render: RenderFn,
}

impl TemplateSpec {
    pub const fn new(id: &'static str, render: RenderFn) -> Self {
        Self { id, render }
    }

    /// Render this template.
    pub fn render(&self, bundle: &NameBundle, ctx: &RenderContext) -> String {
        (self.render)(bundle, ctx)
    }
}

impl fmt::Debug for TemplateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateSpec").field("id", &self.id).finish()
    }
}

impl PartialEq for TemplateSpec {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TemplateSpec {}

/// Secondary context handed to every template alongside the bundle.
///
/// Immutable after creation; builder methods consume and return `self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Name of the application the artifacts belong to (`apps/<root>/`).
    ///
    /// `None` means "the entity is the application", which is what a fresh
    /// application scaffold wants.
    pub project_root_name: Option<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the owning application name.
    pub fn with_project_root_name(mut self, name: impl Into<String>) -> Self {
        self.project_root_name = Some(name.into());
        self
    }

    /// The application directory name, falling back to the entity's `lower`.
    pub fn root_name<'a>(&'a self, bundle: &'a NameBundle) -> &'a str {
        self.project_root_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| bundle.lower())
    }
}
