//! Output placement and naming for generated files.

use crate::config::{DEFAULT_OUTPUT_SUFFIX, EnumlabelConfig};
use crate::emit::DEFAULT_RUNTIME_PATH;
use std::path::{Path, PathBuf};

/// Configuration for one generation run over a package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Package directory to scan; generated files are written here too.
    pub package_dir: PathBuf,

    /// Prepended to the type name in output file names.
    pub output_prefix: String,

    /// Appended to the type name in output file names.
    pub output_suffix: String,

    /// Crate path generated code uses for runtime types.
    pub runtime_path: String,

    /// Generate without writing any file.
    pub dry_run: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            package_dir: PathBuf::from("."),
            output_prefix: String::new(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            dry_run: false,
        }
    }
}

impl BuildConfig {
    pub fn new(package_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_dir: package_dir.into(),
            ..Self::default()
        }
    }

    /// Takes output naming and runtime path from the `[general]` table.
    pub fn from_config(package_dir: impl Into<PathBuf>, config: &EnumlabelConfig) -> Self {
        Self {
            package_dir: package_dir.into(),
            output_prefix: config.general.output_prefix.clone(),
            output_suffix: config.general.output_suffix.clone(),
            runtime_path: config.general.runtime_path.clone(),
            dry_run: false,
        }
    }

    /// `lowercase(prefix + type_name + suffix + ".rs")`
    pub fn output_file_name(&self, type_name: &str) -> String {
        format!(
            "{}{}{}.rs",
            self.output_prefix, type_name, self.output_suffix
        )
        .to_lowercase()
    }

    pub fn output_path(&self, type_name: &str) -> PathBuf {
        self.package_dir.join(self.output_file_name(type_name))
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }
}
