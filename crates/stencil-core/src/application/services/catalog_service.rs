//! Read-only view over the registry for `stencil list` and friends.

use serde::Serialize;

use crate::{
    application::{ApplicationError, ports::ArtifactRegistry},
    domain::{Member, ScaffoldKind},
    error::StencilResult,
};

/// Summary of one registered kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    pub kind: ScaffoldKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Member path patterns, inclusions rendered as `<mount>/ -> <kind>`.
    pub members: Vec<String>,
}

pub struct CatalogService<'a> {
    registry: &'a dyn ArtifactRegistry,
}

impl<'a> CatalogService<'a> {
    pub fn new(registry: &'a dyn ArtifactRegistry) -> Self {
        Self { registry }
    }

    /// Every registered kind, in `ScaffoldKind::ALL` order.
    pub fn list(&self) -> Vec<KindInfo> {
        ScaffoldKind::ALL
            .iter()
            .filter_map(|kind| self.describe(*kind).ok())
            .collect()
    }

    pub fn describe(&self, kind: ScaffoldKind) -> StencilResult<KindInfo> {
        let spec = self
            .registry
            .resolve(kind)
            .ok_or_else(|| ApplicationError::KindNotRegistered {
                kind: kind.to_string(),
            })?;

        let members = spec
            .members
            .iter()
            .map(|m| match m {
                Member::File { path, .. } => (*path).to_string(),
                Member::Include { mount, kind } => format!("{mount}/ -> {kind}"),
            })
            .collect();

        Ok(KindInfo {
            kind,
            name: kind.as_str(),
            description: spec.description,
            members,
        })
    }
}
