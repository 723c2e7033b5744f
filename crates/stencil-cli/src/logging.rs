//! Tracing setup. The library crates only emit events; the binary decides
//! where they go.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

/// Crates whose events reach the terminal.
const CRATES: [&str; 3] = ["stencil", "stencil_core", "stencil_adapters"];

/// Filter levels indexed by the `-v` count, saturating at the last entry.
const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];

/// Install the global subscriber, writing to stderr so stdout carries only
/// command output.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter_directives(derive_level(args)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// `stencil=<level>,stencil_core=<level>,...`
fn filter_directives(level: &str) -> String {
    let directives: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    directives.join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        "error"
    } else {
        LEVELS[usize::from(args.verbose).min(LEVELS.len() - 1)]
    }
}
