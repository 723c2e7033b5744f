//! # Stencil CLI
//!
//! Generates NestJS CRUD modules and applications from one entity name.
//!
//! `main` parses arguments, installs logging, loads [`AppConfig`], then hands
//! the command to its module under `commands/`. Every failure comes back as
//! a [`CliError`] and leaves through [`handle_error`].
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let verbose = cli.global.verbose > 0;
    let stderr_color = !cli.global.no_color && std::io::stderr().is_terminal();

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    debug!(command = ?cli.command, "Arguments parsed");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return handle_error(e, verbose, stderr_color),
    };
    let output = OutputManager::new(&cli.global, &config);

    match run(cli, &config, &output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, stderr_color && output.supports_color()),
    }
}

/// Defaults, file and environment. `config init` skips loading because its
/// target file may not exist yet.
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    if matches!(cli.command, Commands::Config(ConfigCommands::Init { .. })) {
        return Ok(AppConfig::default());
    }
    AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(args) => commands::new::execute(args, &cli.global, config, output),
        Commands::List(args) => commands::list::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => {
            let target = cli
                .global
                .config
                .clone()
                .unwrap_or_else(AppConfig::config_path);
            commands::config::execute(cmd, config, &target, output)
        }
    }
}

/// Translate a `CliError` into a stderr message and an exit code.
fn handle_error(err: CliError, verbose: bool, colored: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, colored));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        assert!(Cli::command().get_author().is_some());
    }
}
