//! `stencil config`: inspect the effective configuration or write a default file.

use std::fs;
use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `target` is where `init` writes and what `path` prints: the `--config`
/// file when given, else the platform default.
pub fn execute(
    cmd: ConfigCommands,
    config: &AppConfig,
    target: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.print(&to_toml(config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&target.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            if init(target, force)? {
                output.success(&format!("Configuration created at {}", target.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {} (use --force to overwrite)",
                    target.display(),
                ))?;
            }
        }
    }

    Ok(())
}

/// Write the built-in defaults to `path`. Returns `false` when a file is
/// already there and `force` is unset.
fn init(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let text = to_toml(&AppConfig::default())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating config directory '{}'", parent.display()))?;
    }
    fs::write(path, text).with_cli_context(|| format!("writing config to '{}'", path.display()))?;
    Ok(true)
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
