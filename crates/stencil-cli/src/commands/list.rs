//! Implementation of the `stencil list` command.

use stencil_adapters::BuiltinRegistry;
use stencil_core::application::{CatalogService, KindInfo};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: &OutputManager) -> CliResult<()> {
    let registry = BuiltinRegistry::new();
    let kinds = CatalogService::new(&registry).list();

    // the global `--output-format json` also forces JSON
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Scaffold kinds:")?;
            for line in table_rows(&kinds) {
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for info in &kinds {
                output.print(info.name)?;
            }
        }
        // JSON bypasses quiet mode so it stays parseable in pipes.
        ListFormat::Json => output.json(&kinds)?,
    }

    Ok(())
}

fn table_rows(kinds: &[KindInfo]) -> Vec<String> {
    let width = kinds.iter().map(|k| k.name.len()).max().unwrap_or(0);
    kinds
        .iter()
        .map(|k| {
            format!(
                "  {:<width$}  {:>2} entries  {}",
                k.name,
                k.members.len(),
                k.description
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_builtin_kind() {
        let registry = BuiltinRegistry::new();
        let rows = table_rows(&CatalogService::new(&registry).list());

        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("  app "));
        assert!(rows[2].contains("crud"));
        assert!(rows[2].contains("14 entries"));
    }

    #[test]
    fn columns_line_up() {
        let registry = BuiltinRegistry::new();
        let rows = table_rows(&CatalogService::new(&registry).list());
        let offsets: Vec<_> = rows.iter().filter_map(|r| r.find("entries")).collect();
        assert!(offsets.windows(2).all(|w| w[0] == w[1]));
    }
}
