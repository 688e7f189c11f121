//! Command-line interface definitions for enumlabel.

use clap::{Args, Parser, Subcommand};
use enumlabel_core::LabelConfig;
use std::path::PathBuf;

/// enumlabel - label codecs for Rust enums and integer newtypes
#[derive(Parser, Debug)]
#[command(name = "enumlabel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to enumlabel.toml configuration file
    #[arg(short, long, global = true, env = "ENUMLABEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one label codec file per type
    Generate(GenerateArgs),

    /// Print the labels a type would get, without writing anything
    Inspect(InspectArgs),
}

/// Flags controlling how declared names become labels.
#[derive(Args, Debug, Clone, Default)]
pub struct LabelArgs {
    /// Prefix every declared name must start with; it is removed from labels
    #[arg(long)]
    pub prefix_to_drop: Option<String>,

    /// Insert underscores at word boundaries and lowercase
    #[arg(long)]
    pub snake_case: bool,

    /// Uppercase the final label
    #[arg(long)]
    pub all_caps: bool,
}

impl LabelArgs {
    pub fn to_label_config(&self, emit_to_string: bool) -> LabelConfig {
        LabelConfig {
            prefix_to_drop: self.prefix_to_drop.clone(),
            snake_case: self.snake_case,
            upper_case: self.all_caps,
            emit_to_string,
        }
    }
}

// ============================================================================
// Generate Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Comma-separated list of type names
    #[arg(short, long = "type", value_delimiter = ',', required = true)]
    pub types: Vec<String>,

    /// Prefix added to output file names (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Suffix added to output file names (overrides config)
    #[arg(long)]
    pub suffix: Option<String>,

    #[command(flatten)]
    pub labels: LabelArgs,

    /// Also generate a `to_label_string` method on each type
    #[arg(long = "to-string")]
    pub emit_to_string: bool,

    /// Print generated code instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Package directory holding the type declarations
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

// ============================================================================
// Inspect Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Comma-separated list of type names
    #[arg(short, long = "type", value_delimiter = ',', required = true)]
    pub types: Vec<String>,

    #[command(flatten)]
    pub labels: LabelArgs,

    /// Package directory holding the type declarations
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}
