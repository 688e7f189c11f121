//! Per-type file generation for a package directory.

use super::{BuildConfig, Package};
use crate::collision::build_label_table;
use crate::emit::EmitOptions;
use crate::error::Result;
use crate::label::LabelConfig;
use crate::pipeline::generate_with;
use crate::types::LabelEntry;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// One type to generate, with the label rules that apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRequest {
    pub type_name: String,
    pub label_config: LabelConfig,
}

impl TypeRequest {
    pub fn new(type_name: impl Into<String>, label_config: LabelConfig) -> Self {
        Self {
            type_name: type_name.into(),
            label_config,
        }
    }
}

/// Information about a generated file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// The type the file was generated for.
    pub type_name: String,
    /// Where the file was (or, on a dry run, would be) written.
    pub path: PathBuf,
    /// The generated source text.
    pub source: String,
    /// Whether the file was written to disk.
    pub written: bool,
}

/// Report of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Package name the types were read from.
    pub package_name: String,
    /// One entry per requested type, in request order.
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    pub fn written_count(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }
}

/// Generates label codec files for the types of one package.
pub struct EnumGenerator {
    config: BuildConfig,
    command: String,
}

impl EnumGenerator {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            command: String::new(),
        }
    }

    /// Sets the command line recorded in generated headers.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Generates one file per request, in order.
    ///
    /// The first failing type aborts the run. Files already written for
    /// earlier types are left in place.
    pub fn generate(&self, requests: &[TypeRequest]) -> Result<GenerationReport> {
        info!(
            package_dir = ?self.config.package_dir,
            type_count = requests.len(),
            dry_run = self.config.dry_run,
            "Starting label codec generation"
        );

        let package = Package::parse(&self.config.package_dir)?;
        let options = EmitOptions::default()
            .with_command(self.command.clone())
            .with_runtime_path(self.config.runtime_path.clone());

        let mut report = GenerationReport {
            package_name: package.name().to_string(),
            files: Vec::with_capacity(requests.len()),
        };

        for request in requests {
            let enum_type = package.enum_type(&request.type_name)?;
            let generated = generate_with(&options, &request.label_config, &enum_type)?;
            let path = self.config.output_path(&request.type_name);

            if self.config.dry_run {
                debug!(type_name = %request.type_name, path = ?path, "Dry run, not writing");
            } else {
                fs::write(&path, &generated.source)?;
                info!(
                    type_name = %request.type_name,
                    path = ?path,
                    bytes_written = generated.source.len(),
                    "Wrote label codec"
                );
            }

            report.add_file(GeneratedFile {
                type_name: generated.type_name,
                path,
                source: generated.source,
                written: !self.config.dry_run,
            });
        }

        info!(
            "Generation complete. Generated {} files",
            report.files.len()
        );
        Ok(report)
    }

    /// Derives the label tables for the requested types without emitting
    /// anything. The package is parsed once for all requests.
    pub fn label_tables(
        &self,
        requests: &[TypeRequest],
    ) -> Result<Vec<(String, Vec<LabelEntry>)>> {
        let package = Package::parse(&self.config.package_dir)?;
        requests
            .iter()
            .map(|request| {
                let enum_type = package.enum_type(&request.type_name)?;
                let table = build_label_table(&enum_type, &request.label_config)?;
                Ok((request.type_name.clone(), table))
            })
            .collect()
    }
}
