//! Inspect command - shows the label each constant would get.

use super::{load_config, type_requests};
use crate::cli::{Cli, InspectArgs};
use enumlabel_core::tooling::{BuildConfig, EnumGenerator};
use enumlabel_core::{LabelEntry, Result};
use tracing::info;

/// Runs the inspect command.
pub fn run(cli: &Cli, args: InspectArgs) -> Result<()> {
    let config = load_config(cli, &args.dir)?;
    let flags = args.labels.to_label_config(false);
    let generator = EnumGenerator::new(BuildConfig::from_config(&args.dir, &config));

    let requests = type_requests(&args.types, &flags, &config);
    for (type_name, table) in generator.label_tables(&requests)? {
        info!(type_name = %type_name, label_count = table.len(), "Labels derived");
        print!("{}", format_table(&type_name, &table));
    }
    Ok(())
}

fn format_table(type_name: &str, table: &[LabelEntry]) -> String {
    let width = table
        .iter()
        .map(|e| e.declared_name.len())
        .max()
        .unwrap_or(0);
    let mut out = format!("{type_name}:\n");
    for entry in table {
        out.push_str(&format!(
            "  {:<width$} -> {}\n",
            entry.declared_name, entry.label
        ));
    }
    out
}
