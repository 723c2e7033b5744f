//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Name-driven NestJS scaffolding",
    long_about = "Stencil turns one entity name into a complete NestJS CRUD module, \
                  or a whole application around it.",
    after_help = "EXAMPLES:\n\
        \x20 stencil new dog\n\
        \x20 stencil new invoiceItem --kind crud --output apps/billing/src\n\
        \x20 stencil list --format json\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an application or module for an entity.
    #[command(
        visible_alias = "n",
        about = "Generate files for an entity",
        after_help = "EXAMPLES:\n\
            \x20 stencil new dog                        # apps/dog layout in ./dog\n\
            \x20 stencil new cat --kind crud -o src     # one CRUD module into src/\n\
            \x20 stencil new cat --kind crud --root-name zoo --dry-run"
    )]
    New(NewArgs),

    /// List the scaffold kinds.
    #[command(
        visible_alias = "ls",
        about = "List scaffold kinds",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get defaults.kind\n\
            \x20 stencil config list\n\
            \x20 stencil config init"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Entity name: ASCII letters and digits, starting with a letter
    #[arg(value_name = "NAME")]
    pub name: String,

    /// app, legacy-app, crud or health [default: `defaults.kind`, else app]
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Target directory [default: ./<root> for applications, . for modules]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Owning application, used in `apps/<root>` paths [default: the entity]
    #[arg(long, value_name = "NAME")]
    pub root_name: Option<String>,

    /// Write into an existing directory, replacing files
    #[arg(long)]
    pub force: bool,

    /// Print the planned files without writing
    #[arg(long)]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Kinds with entry counts and descriptions.
    Table,
    /// One kind per line.
    List,
    /// JSON array of kinds with their members.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `defaults.kind`
    Get { key: String },
    /// Print the effective configuration
    List,
    /// Print the configuration file location
    Path,
    /// Write the built-in defaults to the configuration file
    Init {
        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "stencil", "new", "dog", "--kind", "crud", "-o", "src", "--dry-run",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "dog");
        assert_eq!(args.kind.as_deref(), Some("crud"));
        assert_eq!(args.output, Some(PathBuf::from("src")));
        assert!(args.dry_run);
        assert!(!args.force);
    }

    #[test]
    fn new_kind_is_optional() {
        let cli = Cli::parse_from(["stencil", "n", "dog"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.kind.is_none());
        assert!(args.root_name.is_none());
    }

    #[test]
    fn list_defaults_to_table() {
        let cli = Cli::parse_from(["stencil", "ls"]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn config_init_accepts_force() {
        let cli = Cli::parse_from(["stencil", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init { force: true })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stencil", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
