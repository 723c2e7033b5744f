//! Implementation of the `stencil new` command.
//!
//! Responsibility: translate CLI arguments into a kind, a render context and
//! an output directory, call the core engine, and display results. No
//! generation logic lives here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::json;
use tracing::{debug, info, instrument};

use stencil_adapters::{BuiltinRegistry, LocalFilesystem};
use stencil_core::{
    application::ScaffoldEngine,
    domain::{NameBundle, RelativePath, RenderContext, ScaffoldKind},
    error::StencilError,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Kind used when neither `--kind` nor `defaults.kind` is set.
const FALLBACK_KIND: &str = "app";

/// Execute the `stencil new` command.
///
/// 1. Resolve kind, root name and output directory (flags, then config)
/// 2. `--dry-run`: print the planned paths and stop
/// 3. Generate, then write through `LocalFilesystem`
/// 4. Print a summary
#[instrument(skip_all, fields(entity = %args.name))]
pub fn execute(
    args: NewArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let kind = resolve_kind(args.kind.as_deref(), config)?;
    let ctx = build_context(args.root_name.as_deref(), config)?;
    let engine = ScaffoldEngine::new(Box::new(BuiltinRegistry::new()));

    if args.dry_run {
        let paths = engine
            .plan(&args.name, kind, &ctx)
            .with_cli_context(|| format!("planning '{}'", args.name))?;
        let root = output_dir(args.output.as_deref(), kind, &args.name, &ctx)?;
        debug!(files = paths.len(), root = %root.display(), "Dry run planned");
        report(output, kind, &args.name, &root, &paths, true)?;
        if !output.is_json() {
            output.info("Dry run: nothing was written")?;
        }
        return Ok(());
    }

    let result = engine
        .generate(&args.name, kind, &ctx)
        .with_cli_context(|| format!("generating '{}'", args.name))?;
    let root = output_dir(args.output.as_deref(), kind, &args.name, &ctx)?;

    info!(kind = %kind, root = %root.display(), files = result.len(), "Writing scaffold");
    let written = engine
        .write(&result, &root, &LocalFilesystem::new(), args.force)
        .with_cli_context(|| format!("writing to {}", root.display()))?;

    let paths: Vec<RelativePath> = result.paths().cloned().collect();
    report(output, kind, result.entity(), &root, &paths, false)?;

    if !output.is_json() && !global.quiet {
        output.success(&format!("Wrote {written} files"))?;
        if kind.is_application() {
            output.print("")?;
            output.print("Next steps:")?;
            output.print(&format!("  cd {}", root.display()))?;
            output.print("  yarn install")?;
        }
    }

    Ok(())
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// `--kind`, else `defaults.kind`, else `app`.
fn resolve_kind(flag: Option<&str>, config: &AppConfig) -> CliResult<ScaffoldKind> {
    let raw = flag
        .or(config.defaults.kind.as_deref())
        .unwrap_or(FALLBACK_KIND);
    ScaffoldKind::from_str(raw).map_err(|e| CliError::Core(StencilError::from(e)))
}

/// `--root-name`, else `defaults.root_name`, else the entity name.
fn build_context(flag: Option<&str>, config: &AppConfig) -> CliResult<RenderContext> {
    let Some(root) = flag.or(config.defaults.root_name.as_deref()) else {
        return Ok(RenderContext::new());
    };

    if root.is_empty() || root.contains(['/', '\\']) || root.starts_with('.') {
        return Err(CliError::InvalidInput {
            message: format!("'{root}' is not a usable application directory name"),
            source: None,
        });
    }
    Ok(RenderContext::new().with_project_root_name(root))
}

/// Explicit `--output`, else `./<root>` for applications and `.` for modules.
fn output_dir(
    explicit: Option<&Path>,
    kind: ScaffoldKind,
    raw_name: &str,
    ctx: &RenderContext,
) -> CliResult<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if !kind.is_application() {
        return Ok(PathBuf::from("."));
    }

    let bundle = NameBundle::derive(raw_name).map_err(|e| CliError::Core(e.into()))?;
    Ok(PathBuf::from(ctx.root_name(&bundle)))
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn report(
    output: &OutputManager,
    kind: ScaffoldKind,
    entity: &str,
    root: &Path,
    paths: &[RelativePath],
    dry_run: bool,
) -> CliResult<()> {
    if output.is_json() {
        let files: Vec<&str> = paths.iter().map(RelativePath::as_str).collect();
        output.json(&json!({
            "kind": kind.as_str(),
            "entity": entity,
            "root": root.display().to_string(),
            "dry_run": dry_run,
            "files": files,
        }))?;
        return Ok(());
    }

    let verb = if dry_run { "Would create" } else { "Created" };
    output.header(&format!(
        "{verb} {kind} '{entity}' in {} ({} files)",
        root.display(),
        paths.len()
    ))?;
    for path in paths {
        output.print(&format!("  {}", root.join(path.as_path()).display()))?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
