//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "stencil";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut out = io::stdout();
    match args.shell {
        Shell::Bash => emit(shells::Bash, &mut out),
        Shell::Zsh => emit(shells::Zsh, &mut out),
        Shell::Fish => emit(shells::Fish, &mut out),
        Shell::PowerShell => emit(shells::PowerShell, &mut out),
        Shell::Elvish => emit(shells::Elvish, &mut out),
    }
    Ok(())
}

fn emit<G: Generator>(shell: G, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_names_the_binary() {
        let mut buf = Vec::new();
        emit(shells::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("_stencil"));
        assert!(script.contains("new"));
    }
}
