//! Built-in artifact-set registry.
//!
//! Every kind Stencil knows how to produce is declared below as a `static`
//! member table. Adding a file to a scaffold means adding one line to the
//! matching table; the engine needs no change.
//!
//! # Layout
//!
//! | Kind          | Paths relative to      | Includes                       |
//! |---------------|------------------------|--------------------------------|
//! | `app`         | `apps/<root>/`         | `health`, `crud` under `src/`  |
//! | `legacy-app`  | `apps/<root>/`         | `health`, `crud` under `src/`  |
//! | `crud`        | `src/`                 |                                |
//! | `health`      | `src/`                 |                                |

pub mod templates;

use stencil_core::{
    application::ports::ArtifactRegistry,
    domain::{ArtifactSetSpec, Member, ScaffoldKind, TemplateSpec},
};

use templates::{crud, health, legacy, project};

// ── Member tables ───────────────────────────────────────────────────────────

static HEALTH_MEMBERS: &[Member] = &[
    Member::file("modules/health/adapter.ts", TemplateSpec::new("health/adapter", health::adapter)),
    Member::file("modules/health/controller.ts", TemplateSpec::new("health/controller", health::controller)),
    Member::file("modules/health/module.ts", TemplateSpec::new("health/module", health::module)),
    Member::file("modules/health/service.ts", TemplateSpec::new("health/service", health::service)),
    Member::file("modules/health/swagger.ts", TemplateSpec::new("health/swagger", health::swagger)),
    Member::file(
        "modules/health/__tests__/controller.e2e-spec.ts",
        TemplateSpec::new("health/controller-e2e", health::controller_e2e),
    ),
    Member::file("modules/health/__tests__/module.spec.ts", TemplateSpec::new("health/module-spec", health::module_spec)),
    Member::file("modules/health/__tests__/service.spec.ts", TemplateSpec::new("health/service-spec", health::service_spec)),
];

static CRUD_MEMBERS: &[Member] = &[
    Member::file("core/use-cases/{{name}}-create.ts", TemplateSpec::new("crud/usecase-create", crud::create_usecase)),
    Member::file("core/use-cases/{{name}}-update.ts", TemplateSpec::new("crud/usecase-update", crud::update_usecase)),
    Member::file("core/use-cases/{{name}}-getByID.ts", TemplateSpec::new("crud/usecase-get-by-id", crud::get_by_id_usecase)),
    Member::file("core/use-cases/{{name}}-list.ts", TemplateSpec::new("crud/usecase-list", crud::list_usecase)),
    Member::file("core/use-cases/{{name}}-delete.ts", TemplateSpec::new("crud/usecase-delete", crud::delete_usecase)),
    Member::file("core/entity/{{name}}.ts", TemplateSpec::new("crud/entity", crud::entity)),
    Member::file("core/repository/{{name}}.ts", TemplateSpec::new("crud/repository-port", crud::repository_port)),
    Member::file("modules/{{name}}/adapter.ts", TemplateSpec::new("crud/adapter", crud::adapter)),
    Member::file("modules/{{name}}/controller.ts", TemplateSpec::new("crud/controller", crud::controller)),
    Member::file("modules/{{name}}/module.ts", TemplateSpec::new("crud/module", crud::module)),
    Member::file("modules/{{name}}/repository.ts", TemplateSpec::new("crud/repository", crud::repository)),
    Member::file("modules/{{name}}/swagger.ts", TemplateSpec::new("crud/swagger", crud::swagger)),
    Member::file("modules/{{name}}/__tests__/controller.spec.ts", TemplateSpec::new("crud/controller-spec", crud::controller_spec)),
    Member::file("modules/{{name}}/__tests__/module.spec.ts", TemplateSpec::new("crud/module-spec", crud::module_spec)),
];

/// Root files both application layouts share.
macro_rules! app_members {
    ($dockerfile:expr, $main:expr, $root_module:expr) => {
        &[
            Member::file("jest.config.js", TemplateSpec::new("app/jest-config", project::jest_config)),
            Member::file("tsconfig.build.json", TemplateSpec::new("app/tsconfig-build", project::tsconfig_build)),
            Member::file("tsconfig.json", TemplateSpec::new("app/tsconfig", project::tsconfig)),
            Member::file("package.json", TemplateSpec::new("app/package", project::package_json)),
            Member::file("Dockerfile", $dockerfile),
            Member::file(".eslintignore", TemplateSpec::new("app/eslintignore", project::eslint_ignore)),
            Member::file(".eslintrc.js", TemplateSpec::new("app/eslintrc", project::eslintrc)),
            Member::file(".dockerignore", TemplateSpec::new("app/dockerignore", project::dockerignore)),
            Member::file(".env", TemplateSpec::new("app/env", project::env)),
            Member::file(".vscode/extensions.json", TemplateSpec::new("app/vscode-extensions", project::vscode_extensions)),
            Member::file(".vscode/launch.json", TemplateSpec::new("app/vscode-launch", project::vscode_launch)),
            Member::file(".vscode/settings.json", TemplateSpec::new("app/vscode-settings", project::vscode_settings)),
            Member::file("src/main.ts", $main),
            Member::file("src/modules/module.ts", $root_module),
            Member::include("src", ScaffoldKind::HealthSubmodule),
            Member::include("src", ScaffoldKind::NewCrudModule),
        ]
    };
}

static APP_MEMBERS: &[Member] = app_members!(
    TemplateSpec::new("app/dockerfile", project::dockerfile),
    TemplateSpec::new("app/main", project::main_ts),
    TemplateSpec::new("app/root-module", project::root_module)
);

static LEGACY_APP_MEMBERS: &[Member] = app_members!(
    TemplateSpec::new("legacy-app/dockerfile", legacy::dockerfile),
    TemplateSpec::new("legacy-app/main", legacy::main_ts),
    TemplateSpec::new("legacy-app/root-module", legacy::root_module)
);

/// Every built-in artifact set, in `ScaffoldKind::ALL` order.
pub static BUILTIN_SETS: &[ArtifactSetSpec] = &[
    ArtifactSetSpec {
        kind: ScaffoldKind::NewApplication,
        description: "NestJS application (node:20) with health check and one CRUD module",
        members: APP_MEMBERS,
    },
    ArtifactSetSpec {
        kind: ScaffoldKind::NewLegacyApplication,
        description: "NestJS application in the older layout (node:18, libs/modules/global)",
        members: LEGACY_APP_MEMBERS,
    },
    ArtifactSetSpec {
        kind: ScaffoldKind::NewCrudModule,
        description: "CRUD module: five use cases, entity, repository, controller, swagger",
        members: CRUD_MEMBERS,
    },
    ArtifactSetSpec {
        kind: ScaffoldKind::HealthSubmodule,
        description: "GET /health module with unit and e2e tests",
        members: HEALTH_MEMBERS,
    },
];

/// Registry over [`BUILTIN_SETS`].
///
/// Zero-sized; the tables are `static` so lookups need no locking and the
/// registry can be shared across threads freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRegistry for BuiltinRegistry {
    fn resolve(&self, kind: ScaffoldKind) -> Option<ArtifactSetSpec> {
        BUILTIN_SETS.iter().find(|s| s.kind == kind).copied()
    }

    fn kinds(&self) -> Vec<ScaffoldKind> {
        BUILTIN_SETS.iter().map(|s| s.kind).collect()
    }
}
