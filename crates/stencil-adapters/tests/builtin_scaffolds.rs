//! End-to-end checks of the built-in registry through the scaffold engine.

use std::path::Path;

use stencil_adapters::{BuiltinRegistry, LocalFilesystem, MemoryFilesystem};
use stencil_core::prelude::*;

fn engine() -> ScaffoldEngine {
    ScaffoldEngine::new(Box::new(BuiltinRegistry::new()))
}

fn generate(name: &str, kind: ScaffoldKind) -> GenerationResult {
    engine()
        .generate(name, kind, &RenderContext::new())
        .unwrap()
}

/// Relative `from '...'` specifiers in a TypeScript source.
fn relative_imports(source: &str) -> Vec<&str> {
    source
        .split("from '")
        .skip(1)
        .filter_map(|rest| rest.split('\'').next())
        .filter(|spec| spec.starts_with("./") || spec.starts_with("../"))
        .collect()
}

/// Resolve `spec` against the directory of `from`, as a `/`-joined path.
fn resolve(from: &str, spec: &str) -> String {
    let mut parts: Vec<&str> = from.split('/').collect();
    parts.pop();
    for segment in spec.split('/') {
        match segment {
            "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}

#[test]
fn crud_module_is_complete() {
    let result = generate("teste", ScaffoldKind::NewCrudModule);

    let expected = [
        "core/use-cases/teste-create.ts",
        "core/use-cases/teste-update.ts",
        "core/use-cases/teste-getByID.ts",
        "core/use-cases/teste-list.ts",
        "core/use-cases/teste-delete.ts",
        "core/entity/teste.ts",
        "core/repository/teste.ts",
        "modules/teste/adapter.ts",
        "modules/teste/controller.ts",
        "modules/teste/module.ts",
        "modules/teste/repository.ts",
        "modules/teste/swagger.ts",
        "modules/teste/__tests__/controller.spec.ts",
        "modules/teste/__tests__/module.spec.ts",
    ];
    let paths: Vec<_> = result.paths().map(RelativePath::as_str).collect();
    assert_eq!(paths, expected);
}

#[test]
fn teste_controller_contract() {
    let result = generate("teste", ScaffoldKind::NewCrudModule);
    let controller = result.get("modules/teste/controller.ts").unwrap();

    assert!(controller.contains("TesteCreateInput"));
    assert!(controller.contains("TesteUpdateOutput"));
    assert!(controller.contains("@ApiTags('teste')"));
    assert!(controller.contains("@Version('1')"));
    assert!(controller.contains("export class TesteController"));
}

#[test]
fn dog_application_env_and_image() {
    let result = generate("dog", ScaffoldKind::NewApplication);

    assert!(result.get(".env").unwrap().contains("DOG_PORT=4000"));
    assert!(result.get("Dockerfile").unwrap().starts_with("FROM node:20"));
    assert!(result.contains("src/modules/health/controller.ts"));
    assert!(result.contains("src/modules/dog/controller.ts"));
    assert!(result.contains(".vscode/launch.json"));
}

#[test]
fn legacy_application_uses_old_layout() {
    let result = generate("dog", ScaffoldKind::NewLegacyApplication);

    assert!(result.get("Dockerfile").unwrap().starts_with("FROM node:18"));
    assert!(result.get("src/main.ts").unwrap().contains("libs/modules/global"));
    assert_eq!(
        result.len(),
        generate("dog", ScaffoldKind::NewApplication).len()
    );
}

#[test]
fn empty_name_is_rejected() {
    let err = engine()
        .generate("", ScaffoldKind::NewCrudModule, &RenderContext::new())
        .unwrap_err();
    assert!(err.is_invalid_name());
}

#[test]
fn reserved_names_are_rejected_for_every_kind() {
    for name in ["health", "Health", "HEALTH", "Delete", "class", "Model", "INPUT", "z"] {
        for kind in ScaffoldKind::ALL {
            let err = engine()
                .generate(name, kind, &RenderContext::new())
                .unwrap_err();
            assert!(err.is_invalid_name(), "{kind} accepted {name}: {err}");
        }
    }
}

#[test]
fn names_near_reserved_segments_compose() {
    for name in ["healthCheck", "Healthy", "models", "classroom", "newsletter"] {
        for kind in ScaffoldKind::ALL {
            let result = engine().generate(name, kind, &RenderContext::new());
            assert!(result.is_ok(), "{kind} failed for {name}: {:?}", result.err());
        }
    }

    let app = generate("healthCheck", ScaffoldKind::NewApplication);
    assert!(app.get("src/modules/health/controller.ts").is_some());
    assert!(app.get("src/modules/healthcheck/controller.ts").is_some());
}

/// Names declared with `const` in a source.
fn const_bindings(source: &str) -> Vec<&str> {
    source
        .split("const ")
        .skip(1)
        .filter_map(|rest| {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            (end > 0).then(|| &rest[..end])
        })
        .collect()
}

#[test]
fn use_cases_never_redeclare_a_binding() {
    for name in ["teste", "modelo", "inputs", "users", "created2"] {
        let result = generate(name, ScaffoldKind::NewCrudModule);
        for artifact in result.artifacts() {
            if !artifact.path.as_str().starts_with("core/use-cases/") {
                continue;
            }
            let mut seen = std::collections::HashSet::new();
            for binding in const_bindings(&artifact.content) {
                assert!(
                    seen.insert(binding),
                    "{} declares {binding} twice",
                    artifact.path.as_str()
                );
            }
        }
    }
}

#[test]
fn every_kind_is_deterministic() {
    let engine = engine();
    let ctx = RenderContext::new().with_project_root_name("zoo");
    for kind in ScaffoldKind::ALL {
        let a = engine.generate("invoiceItem", kind, &ctx).unwrap();
        let b = engine.generate("invoiceItem", kind, &ctx).unwrap();
        assert_eq!(a, b, "{kind} differs between runs");
    }
}

#[test]
fn raw_mixed_case_never_leaks() {
    for kind in ScaffoldKind::ALL {
        let result = generate("invoiceItem", kind);
        for artifact in result.artifacts() {
            assert!(
                !artifact.content.contains("invoiceItem"),
                "{} uses the raw name",
                artifact.path
            );
            assert!(!artifact.path.as_str().contains("invoiceItem"));
        }
    }
}

#[test]
fn relative_imports_resolve_within_result() {
    for kind in ScaffoldKind::ALL {
        let result = generate("teste", kind);
        for artifact in result.artifacts() {
            if !artifact.path.as_str().ends_with(".ts") {
                continue;
            }
            for spec in relative_imports(&artifact.content) {
                let target = format!("{}.ts", resolve(artifact.path.as_str(), spec));
                assert!(
                    result.contains(&target),
                    "{kind}: {} imports {spec} but {target} is missing",
                    artifact.path
                );
            }
        }
    }
}

#[test]
fn concurrent_generation_matches_sequential() {
    let engine = engine();
    let ctx = RenderContext::new();
    let expected = engine
        .generate("dog", ScaffoldKind::NewApplication, &ctx)
        .unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| engine.generate("dog", ScaffoldKind::NewApplication, &ctx)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn write_to_memory_filesystem() {
    let engine = engine();
    let result = engine
        .generate("teste", ScaffoldKind::HealthSubmodule, &RenderContext::new())
        .unwrap();
    let fs = MemoryFilesystem::new();

    let written = engine
        .write(&result, Path::new("/apps/teste/src"), &fs, false)
        .unwrap();

    assert_eq!(written, 8);
    assert_eq!(fs.file_count(), 8);
    assert!(
        fs.read_file(Path::new("/apps/teste/src/modules/health/service.ts"))
            .unwrap()
            .contains("apps/teste/package.json")
    );
}

#[test]
fn write_to_disk_refuses_existing_root() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine();
    let result = engine
        .generate("dog", ScaffoldKind::NewApplication, &RenderContext::new())
        .unwrap();

    let written = engine
        .write(&result, dir.path(), &LocalFilesystem::new(), true)
        .unwrap();
    assert_eq!(written, result.len());
    assert!(dir.path().join("src/modules/dog/module.ts").is_file());

    let err = engine
        .write(&result, dir.path(), &LocalFilesystem::new(), false)
        .unwrap_err();
    assert!(matches!(
        err,
        StencilError::Application(stencil_core::application::ApplicationError::ProjectExists { .. })
    ));
}
