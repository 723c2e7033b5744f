//! Artifact-set specifications: which files one scaffold kind produces.
//!
//! A set is an ordered list of [`Member`]s. A member is either one file
//! (a path pattern plus the template that fills it) or the inclusion of
//! another kind's whole set under a directory prefix. Inclusion is how an
//! application bundles its health sub-module without copying its members.

use crate::domain::{entities::template::TemplateSpec, value_objects::ScaffoldKind};

/// One entry of an artifact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member {
    /// A single generated file.
    File {
        /// Path pattern, expanded with [`crate::domain::NameBundle::expand`].
        path: &'static str,
        template: TemplateSpec,
    },
    /// Every member of `kind`, with paths prefixed by `mount`.
    Include {
        mount: &'static str,
        kind: ScaffoldKind,
    },
}

impl Member {
    pub const fn file(path: &'static str, template: TemplateSpec) -> Self {
        Self::File { path, template }
    }

    pub const fn include(mount: &'static str, kind: ScaffoldKind) -> Self {
        Self::Include { mount, kind }
    }
}

/// A fixed, ordered group of members forming one logical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSetSpec {
    pub kind: ScaffoldKind,
    pub description: &'static str,
    pub members: &'static [Member],
}

impl ArtifactSetSpec {
    /// Kinds this set includes, in declaration order.
    pub fn includes(&self) -> impl Iterator<Item = (&'static str, ScaffoldKind)> + '_ {
        self.members.iter().filter_map(|m| match m {
            Member::Include { mount, kind } => Some((*mount, *kind)),
            Member::File { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::template::RenderContext, naming::NameBundle};

    fn empty(_: &NameBundle, _: &RenderContext) -> String {
        String::new()
    }

    static MEMBERS: &[Member] = &[
        Member::file("modules/{{name}}/controller.ts", TemplateSpec::new("t/a", empty)),
        Member::include("src", ScaffoldKind::HealthSubmodule),
        Member::file("{{Name}}.md", TemplateSpec::new("t/b", empty)),
    ];

    static SET: ArtifactSetSpec = ArtifactSetSpec {
        kind: ScaffoldKind::NewCrudModule,
        description: "test",
        members: MEMBERS,
    };

    #[test]
    fn includes_skip_file_members() {
        let includes: Vec<_> = SET.includes().collect();
        assert_eq!(includes, vec![("src", ScaffoldKind::HealthSubmodule)]);
    }
}
