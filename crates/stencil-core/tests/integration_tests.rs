//! Integration tests for stencil-core, driven through the public API only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use stencil_core::prelude::*;

struct Registry;

fn adapter(b: &NameBundle, _: &RenderContext) -> String {
    format!("export abstract class I{}CreateAdapter {{}}\n", b.pascal())
}

fn controller(b: &NameBundle, _: &RenderContext) -> String {
    format!(
        "import {{ I{p}CreateAdapter }} from './adapter';\n@ApiTags('{l}')\nexport class {p}Controller {{}}\n",
        p = b.pascal(),
        l = b.lower()
    )
}

fn env(b: &NameBundle, _: &RenderContext) -> String {
    format!("{}_PORT=4000\n", b.upper())
}

static CRUD: &[Member] = &[
    Member::file("modules/{{name}}/adapter.ts", TemplateSpec::new("crud/adapter", adapter)),
    Member::file("modules/{{name}}/controller.ts", TemplateSpec::new("crud/controller", controller)),
];

static APP: &[Member] = &[
    Member::file(".env", TemplateSpec::new("app/env", env)),
    Member::include("src", ScaffoldKind::NewCrudModule),
];

impl ArtifactRegistry for Registry {
    fn resolve(&self, kind: ScaffoldKind) -> Option<ArtifactSetSpec> {
        let members = match kind {
            ScaffoldKind::NewCrudModule => CRUD,
            ScaffoldKind::NewApplication => APP,
            _ => return None,
        };
        Some(ArtifactSetSpec {
            kind,
            description: "test",
            members,
        })
    }

    fn kinds(&self) -> Vec<ScaffoldKind> {
        vec![ScaffoldKind::NewApplication, ScaffoldKind::NewCrudModule]
    }
}

/// Records writes in a map so the test can inspect them.
#[derive(Default)]
struct RecordingWriter {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl ArtifactWriter for RecordingWriter {
    fn create_dir_all(&self, _path: &Path) -> StencilResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn remove_dir_all(&self, _path: &Path) -> StencilResult<()> {
        self.files.lock().unwrap().clear();
        Ok(())
    }
}

#[test]
fn test_full_generate_and_write_workflow() {
    let engine = ScaffoldEngine::new(Box::new(Registry));
    let result = engine
        .generate("teste", ScaffoldKind::NewApplication, &RenderContext::new())
        .unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result.get(".env"), Some("TESTE_PORT=4000\n"));
    assert!(
        result
            .get("src/modules/teste/controller.ts")
            .unwrap()
            .contains("@ApiTags('teste')")
    );

    let writer = RecordingWriter::default();
    let written = engine
        .write(&result, Path::new("/apps/teste"), &writer, false)
        .unwrap();
    assert_eq!(written, 3);

    let files = writer.files.lock().unwrap();
    assert!(files.contains_key(Path::new("/apps/teste/src/modules/teste/adapter.ts")));
}

#[test]
fn test_names_flow_into_every_artifact() {
    let engine = ScaffoldEngine::new(Box::new(Registry));
    let result = engine
        .generate("invoiceItem", ScaffoldKind::NewCrudModule, &RenderContext::new())
        .unwrap();

    for artifact in result.artifacts() {
        assert!(artifact.content.contains("InvoiceItem"), "{}", artifact.path);
        assert!(artifact.path.as_str().contains("invoiceitem"));
    }
}

#[test]
fn test_catalog_reflects_registry() {
    let registry = Registry;
    let catalog = CatalogService::new(&registry);
    let kinds: Vec<_> = catalog.list().into_iter().map(|k| k.kind).collect();
    assert_eq!(
        kinds,
        vec![ScaffoldKind::NewApplication, ScaffoldKind::NewCrudModule]
    );
}

#[test]
fn test_invalid_names_never_reach_templates() {
    let engine = ScaffoldEngine::new(Box::new(Registry));
    for bad in ["", "my-entity", "9lives", "with space"] {
        let err = engine
            .generate(bad, ScaffoldKind::NewCrudModule, &RenderContext::new())
            .unwrap_err();
        assert!(err.is_invalid_name(), "{bad:?} should be rejected");
    }
}
