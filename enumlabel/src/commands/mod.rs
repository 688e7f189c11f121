//! Command handlers for the enumlabel CLI.

pub mod generate;
pub mod inspect;

use crate::cli::Cli;
use enumlabel_core::tooling::TypeRequest;
use enumlabel_core::{EnumlabelConfig, LabelConfig, Result};
use std::path::Path;
use tracing::{debug, info};

/// Loads `--config` if given, else searches from the package directory upward.
pub(crate) fn load_config(cli: &Cli, package_dir: &Path) -> Result<EnumlabelConfig> {
    match &cli.config {
        Some(path) => EnumlabelConfig::from_path(path),
        None => Ok(EnumlabelConfig::discover(package_dir)?.unwrap_or_default()),
    }
}

/// Pairs each type with its label rules: a `[[types]]` entry wins over flags.
pub(crate) fn type_requests(
    types: &[String],
    flags: &LabelConfig,
    config: &EnumlabelConfig,
) -> Vec<TypeRequest> {
    types
        .iter()
        .map(|type_name| {
            let label_config = match config.type_config(type_name) {
                Some(configured) => {
                    info!(type_name = %type_name, "Using label rules from configuration file");
                    configured.clone()
                }
                None => {
                    debug!(type_name = %type_name, "Using label rules from command line");
                    flags.clone()
                }
            };
            TypeRequest::new(type_name.clone(), label_config)
        })
        .collect()
}

/// The arguments this process was started with, for generated headers.
pub(crate) fn command_line() -> String {
    std::env::args().skip(1).collect::<Vec<_>>().join(" ")
}
