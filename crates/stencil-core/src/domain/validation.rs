use crate::domain::{
    entities::{ArtifactSetSpec, RenderContext},
    error::DomainError,
    naming::NameBundle,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_entity_name(raw: &str) -> Result<NameBundle, DomainError> {
        NameBundle::derive(raw)
    }

    /// The project root name lands in import paths, JSON strings and the
    /// Dockerfile, so it is limited to ASCII letters, digits, `-` and `_`,
    /// starting with a letter or digit. An empty name falls back to the
    /// entity and is accepted.
    pub fn validate_root_name(ctx: &RenderContext) -> Result<(), DomainError> {
        let Some(root) = ctx.project_root_name.as_deref().filter(|s| !s.is_empty()) else {
            return Ok(());
        };

        if let Some(bad) = root
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::invalid_name(
                root,
                format!("unsupported character {bad:?} in project root name"),
            ));
        }
        if root.starts_with(['-', '_']) {
            return Err(DomainError::invalid_name(
                root,
                "project root name must start with a letter or digit",
            ));
        }
        Ok(())
    }

    /// A set may not include its own kind directly.
    pub fn validate_artifact_set(spec: &ArtifactSetSpec) -> Result<(), DomainError> {
        match spec.includes().find(|(_, kind)| *kind == spec.kind) {
            Some((mount, kind)) => Err(DomainError::CyclicInclude {
                kind: spec.kind.to_string(),
                chain: format!("{mount}/ -> {kind}"),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{Member, TemplateSpec},
        value_objects::ScaffoldKind,
    };

    fn empty(_: &NameBundle, _: &RenderContext) -> String {
        String::new()
    }

    #[test]
    fn self_include_is_rejected() {
        static MEMBERS: &[Member] = &[Member::include("src", ScaffoldKind::NewCrudModule)];
        let spec = ArtifactSetSpec {
            kind: ScaffoldKind::NewCrudModule,
            description: "loops",
            members: MEMBERS,
        };
        assert!(matches!(
            DomainValidator::validate_artifact_set(&spec),
            Err(DomainError::CyclicInclude { .. })
        ));
    }

    #[test]
    fn plain_set_is_valid() {
        static MEMBERS: &[Member] = &[Member::file("a.ts", TemplateSpec::new("t/a", empty))];
        let spec = ArtifactSetSpec {
            kind: ScaffoldKind::HealthSubmodule,
            description: "ok",
            members: MEMBERS,
        };
        assert!(DomainValidator::validate_artifact_set(&spec).is_ok());
    }

    #[test]
    fn root_name_accepts_package_safe_names() {
        for root in ["zoo", "billing-api", "my_app", "app2", ""] {
            let ctx = RenderContext::new().with_project_root_name(root);
            assert!(DomainValidator::validate_root_name(&ctx).is_ok(), "{root}");
        }
        assert!(DomainValidator::validate_root_name(&RenderContext::new()).is_ok());
    }

    #[test]
    fn root_name_rejects_quotes_and_separators() {
        for root in ["a'b", "a\"b", "a b", "a/b", "../zoo", ".hidden", "-x", "café", "a`b", "a$b"] {
            let ctx = RenderContext::new().with_project_root_name(root);
            assert!(
                matches!(
                    DomainValidator::validate_root_name(&ctx),
                    Err(DomainError::InvalidName { .. })
                ),
                "accepted: {root}"
            );
        }
    }
}
