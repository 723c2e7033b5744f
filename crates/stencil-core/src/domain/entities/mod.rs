pub mod artifact_set;
pub mod common;
pub mod generation;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact_set::{ArtifactSetSpec, Member};
pub use generation::{Artifact, GenerationResult};
pub use template::{RenderContext, TemplateSpec};
