//! Scaffold Engine - the composition root.
//!
//! This service coordinates one generation run:
//! 1. Validate the entity name and derive its `NameBundle` (once)
//! 2. Resolve the artifact set for the requested kind
//! 3. Render every member in order, expanding inclusions under their mount
//! 4. Collect everything into one `GenerationResult`
//!
//! Generation is all-or-nothing: any error aborts the run before the caller
//! sees a result. Handing the result to a writer is a separate step
//! ([`ScaffoldEngine::write`]).

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactRegistry, ArtifactWriter},
    },
    domain::{
        Artifact, ArtifactSetSpec, DomainError, DomainValidator as validator, GenerationResult,
        Member, NameBundle, RelativePath, RenderContext, ScaffoldKind,
    },
    error::StencilResult,
};

/// Main scaffolding service.
///
/// Holds nothing but the read-only registry, so one engine can serve
/// concurrent `generate` calls.
pub struct ScaffoldEngine {
    registry: Box<dyn ArtifactRegistry>,
}

impl ScaffoldEngine {
    /// Create a new engine over the given registry.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stencil_core::application::ScaffoldEngine;
    ///
    /// let engine = ScaffoldEngine::new(Box::new(registry));
    /// ```
    pub fn new(registry: Box<dyn ArtifactRegistry>) -> Self {
        Self { registry }
    }

    /// Generate every artifact of `kind` for the entity `raw_name`.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `raw_name` or the context's project root name fails
    ///   validation
    /// - `KindNotRegistered` if the registry has no set for `kind`
    /// - `DuplicateArtifactPath` / `CyclicInclude` if the registry is misconfigured
    #[instrument(skip_all, fields(entity = %raw_name, kind = %kind))]
    pub fn generate(
        &self,
        raw_name: &str,
        kind: ScaffoldKind,
        ctx: &RenderContext,
    ) -> StencilResult<GenerationResult> {
        let bundle = validator::validate_entity_name(raw_name)?;
        validator::validate_root_name(ctx)?;
        let spec = self.resolve(kind)?;

        let mut result = GenerationResult::new(kind, bundle.raw());
        let mut chain = vec![kind];
        self.compose(&spec, "", &bundle, ctx, &mut chain, &mut result)?;

        info!(
            files = result.len(),
            bytes = result.total_size(),
            "Generation completed"
        );
        Ok(result)
    }

    /// The paths `generate` would produce, without keeping the content.
    pub fn plan(
        &self,
        raw_name: &str,
        kind: ScaffoldKind,
        ctx: &RenderContext,
    ) -> StencilResult<Vec<RelativePath>> {
        let result = self.generate(raw_name, kind, ctx)?;
        Ok(result.paths().cloned().collect())
    }

    /// Persist a result under `root` through `writer`.
    ///
    /// Without `overwrite`, an application refuses an existing `root` and a
    /// module refuses to replace any file already under it. When the root was
    /// created by this call and a write fails, the root is removed again.
    /// Returns the number of files written.
    #[instrument(skip_all, fields(root = %root.display(), files = result.len()))]
    pub fn write(
        &self,
        result: &GenerationResult,
        root: &Path,
        writer: &dyn ArtifactWriter,
        overwrite: bool,
    ) -> StencilResult<usize> {
        let existed = writer.exists(root);
        if !overwrite {
            if existed && result.kind().is_application() {
                return Err(ApplicationError::ProjectExists {
                    path: root.to_path_buf(),
                }
                .into());
            }
            if let Some(path) = result
                .paths()
                .map(|p| root.join(p.as_path()))
                .find(|p| writer.exists(p))
            {
                return Err(ApplicationError::ArtifactExists { path }.into());
            }
        }

        match write_all(result, root, writer) {
            Ok(count) => {
                info!(count, "Successfully wrote all files");
                Ok(count)
            }
            Err(e) if !existed => {
                warn!("Write failed, attempting rollback");
                rollback(root, writer)?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Kinds the registry knows about.
    pub fn kinds(&self) -> Vec<ScaffoldKind> {
        self.registry.kinds()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve(&self, kind: ScaffoldKind) -> StencilResult<ArtifactSetSpec> {
        let spec = self
            .registry
            .resolve(kind)
            .ok_or_else(|| ApplicationError::KindNotRegistered {
                kind: kind.to_string(),
            })?;
        validator::validate_artifact_set(&spec)?;
        Ok(spec)
    }

    /// Render `spec` into `result`, recursing into inclusions.
    ///
    /// `chain` holds the kinds currently being expanded; meeting one of them
    /// again means the registry loops.
    fn compose(
        &self,
        spec: &ArtifactSetSpec,
        mount: &str,
        bundle: &NameBundle,
        ctx: &RenderContext,
        chain: &mut Vec<ScaffoldKind>,
        result: &mut GenerationResult,
    ) -> StencilResult<()> {
        for member in spec.members {
            match *member {
                Member::File { path, template } => {
                    let path = RelativePath::try_new(bundle.expand(path))?.mounted_under(mount)?;
                    debug!(path = %path, template = template.id, "Rendering artifact");

                    let content = template.render(bundle, ctx);
                    result.insert(Artifact {
                        path,
                        content,
                        template_id: template.id,
                    })?;
                }
                Member::Include { mount: sub, kind } => {
                    if chain.contains(&kind) {
                        let trail: Vec<&str> = chain.iter().map(ScaffoldKind::as_str).collect();
                        return Err(DomainError::CyclicInclude {
                            kind: kind.to_string(),
                            chain: format!("{} -> {}", trail.join(" -> "), kind),
                        }
                        .into());
                    }

                    let included = self.resolve(kind)?;
                    let nested = join_mount(mount, sub);
                    debug!(kind = %kind, mount = %nested, "Including artifact set");

                    chain.push(kind);
                    self.compose(&included, &nested, bundle, ctx, chain, result)?;
                    chain.pop();
                }
            }
        }

        Ok(())
    }
}

fn join_mount(outer: &str, inner: &str) -> String {
    let outer = outer.trim_end_matches('/');
    let inner = inner.trim_matches('/');
    match (outer.is_empty(), inner.is_empty()) {
        (true, _) => inner.to_string(),
        (false, true) => outer.to_string(),
        (false, false) => format!("{outer}/{inner}"),
    }
}

fn write_all(
    result: &GenerationResult,
    root: &Path,
    writer: &dyn ArtifactWriter,
) -> StencilResult<usize> {
    writer.create_dir_all(root)?;

    let mut count = 0;
    for artifact in result.artifacts() {
        let path = root.join(artifact.path.as_path());

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            writer.create_dir_all(parent)?;
        }

        writer.write_file(&path, &artifact.content)?;
        count += 1;
    }

    Ok(count)
}

/// Best-effort rollback on failure.
fn rollback(root: &Path, writer: &dyn ArtifactWriter) -> StencilResult<()> {
    writer.remove_dir_all(root).map_err(|e| {
        warn!(error = %e, path = %root.display(), "Rollback failed");
        ApplicationError::RollbackFailed {
            path: root.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    info!("Rollback successful");
    Ok(())
}
