//! Domain value objects: ScaffoldKind.
//!
//! # Design
//!
//! Pure value types: `Copy`, equality-by-value, no identity. What a kind
//! *contains* lives in the artifact-set registry; this file only defines the
//! names and their string forms.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Register an `ArtifactSetSpec` for it in the built-in registry

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ScaffoldKind ─────────────────────────────────────────────────────────────

/// The category of artifact set to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaffoldKind {
    /// A new top-level application (`node:20` image, tracing/metrics bootstrap).
    NewApplication,
    /// The older application layout (`node:18` image, `libs/modules/global`).
    NewLegacyApplication,
    /// One CRUD module inside an existing application.
    NewCrudModule,
    /// The `/health` sub-module bundled with every application.
    HealthSubmodule,
}

impl ScaffoldKind {
    /// Every kind, in display order.
    pub const ALL: [ScaffoldKind; 4] = [
        Self::NewApplication,
        Self::NewLegacyApplication,
        Self::NewCrudModule,
        Self::HealthSubmodule,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewApplication => "app",
            Self::NewLegacyApplication => "legacy-app",
            Self::NewCrudModule => "crud",
            Self::HealthSubmodule => "health",
        }
    }

    /// Whether this kind lays out a whole application (as opposed to a
    /// module dropped into an existing `src/`).
    pub const fn is_application(self) -> bool {
        matches!(self, Self::NewApplication | Self::NewLegacyApplication)
    }
}

impl fmt::Display for ScaffoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaffoldKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "app" | "application" | "new-application" => Ok(Self::NewApplication),
            "legacy-app" | "legacy" | "new-legacy-application" => Ok(Self::NewLegacyApplication),
            "crud" | "module" | "new-crud-module" => Ok(Self::NewCrudModule),
            "health" | "health-submodule" => Ok(Self::HealthSubmodule),
            other => Err(DomainError::UnknownScaffoldKind {
                kind: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(ScaffoldKind::from_str("app").unwrap(), ScaffoldKind::NewApplication);
        assert_eq!(
            ScaffoldKind::from_str("New-Crud-Module").unwrap(),
            ScaffoldKind::NewCrudModule
        );
        assert_eq!(
            ScaffoldKind::from_str("legacy").unwrap(),
            ScaffoldKind::NewLegacyApplication
        );
    }

    #[test]
    fn unknown_kind_is_error() {
        assert!(matches!(
            ScaffoldKind::from_str("lambda"),
            Err(DomainError::UnknownScaffoldKind { .. })
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in ScaffoldKind::ALL {
            assert_eq!(ScaffoldKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn application_kinds() {
        assert!(ScaffoldKind::NewApplication.is_application());
        assert!(ScaffoldKind::NewLegacyApplication.is_application());
        assert!(!ScaffoldKind::NewCrudModule.is_application());
        assert!(!ScaffoldKind::HealthSubmodule.is_application());
    }
}
