use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    entities::common::RelativePath, error::DomainError, value_objects::ScaffoldKind,
};

/// Output of one `generate` call, ready for the writer collaborator.
///
/// Artifacts keep the order their members were declared in. Paths are unique;
/// [`GenerationResult::insert`] rejects a second artifact for a path already
/// present. It contains no business logic, only data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    kind: ScaffoldKind,
    entity: String,
    artifacts: Vec<Artifact>,
    #[serde(skip)]
    seen: HashSet<RelativePath>,
}

impl GenerationResult {
    pub fn new(kind: ScaffoldKind, entity: impl Into<String>) -> Self {
        Self {
            kind,
            entity: entity.into(),
            artifacts: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append an artifact.
    ///
    /// # Errors
    ///
    /// `DuplicateArtifactPath` if another artifact already targets `path`.
    pub fn insert(&mut self, artifact: Artifact) -> Result<(), DomainError> {
        if !self.seen.insert(artifact.path.clone()) {
            return Err(DomainError::DuplicateArtifactPath {
                kind: self.kind.to_string(),
                path: artifact.path.to_string(),
            });
        }
        self.artifacts.push(artifact);
        Ok(())
    }

    pub fn kind(&self) -> ScaffoldKind {
        self.kind
    }

    /// The raw entity name the result was generated for.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Content of the artifact at `path`, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|a| a.path.as_str() == path)
            .map(|a| a.content.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.artifacts.iter().any(|a| a.path.as_str() == path)
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.artifacts.iter().map(|a| &a.path)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Total bytes of generated text.
    pub fn total_size(&self) -> usize {
        self.artifacts.iter().map(Artifact::size).sum()
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: RelativePath,
    pub content: String,
    /// Id of the template that produced `content`.
    pub template_id: &'static str,
}

impl Artifact {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
