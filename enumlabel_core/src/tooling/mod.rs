//! Filesystem-facing tooling around the pure generator.
//!
//! This module provides:
//! - Discovery of enumerated types in a package directory
//! - Output file naming and placement
//! - Writing one generated file per requested type
//!
//! ## Quick Start (in build.rs)
//!
//! ```rust,ignore
//! fn main() {
//!     let requests = [enumlabel_core::tooling::TypeRequest::new(
//!         "ShirtSize",
//!         enumlabel_core::LabelConfig::default(),
//!     )];
//!     enumlabel_core::tooling::generate("src/model", &requests)
//!         .expect("label codec generation failed");
//!     println!("cargo:rerun-if-changed=src/model");
//! }
//! ```

mod build_config;
mod discovery;
mod generator;

pub use build_config::*;
pub use discovery::*;
pub use generator::*;

use crate::error::Result;
use std::path::PathBuf;

/// Generates files for `requests` into `package_dir` with default naming.
pub fn generate(
    package_dir: impl Into<PathBuf>,
    requests: &[TypeRequest],
) -> Result<GenerationReport> {
    EnumGenerator::new(BuildConfig::new(package_dir)).generate(requests)
}

/// Generates files for `requests` with explicit build settings.
pub fn generate_with_config(
    config: BuildConfig,
    requests: &[TypeRequest],
) -> Result<GenerationReport> {
    EnumGenerator::new(config).generate(requests)
}
