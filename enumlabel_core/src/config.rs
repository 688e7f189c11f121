use crate::emit::DEFAULT_RUNTIME_PATH;
use crate::error::{EnumlabelError, Result};
use crate::label::LabelConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace};

pub const CONFIG_FILE_NAME: &str = "enumlabel.toml";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_enumlabel";

/// Settings shared by every type of a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Prepended to the type name when naming the output file
    #[serde(default)]
    pub output_prefix: String,
    /// Appended to the type name when naming the output file
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    /// Crate path generated code uses to reach the runtime types
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_prefix: String::new(),
            output_suffix: default_output_suffix(),
            runtime_path: default_runtime_path(),
        }
    }
}

fn default_output_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}

fn default_runtime_path() -> String {
    DEFAULT_RUNTIME_PATH.to_string()
}

/// Label rules pinned to one type name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeConfig {
    pub name: String,
    #[serde(flatten)]
    pub labels: LabelConfig,
}

/// Contents of `enumlabel.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnumlabelConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub types: Vec<TypeConfig>,
}

impl EnumlabelConfig {
    /// Loads and validates a specific configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading enumlabel configuration from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            EnumlabelError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        Self::parse(&contents)
    }

    /// Parses configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: EnumlabelConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            EnumlabelError::from(e)
        })?;
        config.validate()?;
        debug!(
            type_count = config.types.len(),
            "Successfully parsed TOML configuration"
        );
        Ok(config)
    }

    /// Searches `start_dir` and its ancestors for `enumlabel.toml`.
    ///
    /// A missing file is not an error: the run then uses command-line flags only.
    pub fn discover(start_dir: impl AsRef<Path>) -> Result<Option<Self>> {
        match Self::find_config_file(start_dir.as_ref()) {
            Some(path) => Self::from_path(path).map(Some),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(None)
            }
        }
    }

    fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start_dir);
        for path in start_dir.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.is_file() {
                info!("Found configuration file at: {:?}", config_path);
                return Some(config_path);
            }
        }
        None
    }

    /// Label rules configured for `type_name`, if any.
    pub fn type_config(&self, type_name: &str) -> Option<&LabelConfig> {
        self.types
            .iter()
            .find(|t| t.name == type_name)
            .map(|t| &t.labels)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for type_config in &self.types {
            if !seen.insert(type_config.name.as_str()) {
                return Err(EnumlabelError::config(format!(
                    "type {} is configured more than once",
                    type_config.name
                )));
            }
        }
        Ok(())
    }
}
