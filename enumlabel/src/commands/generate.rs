//! Generate command - writes one label codec file per requested type.

use super::{command_line, load_config, type_requests};
use crate::cli::{Cli, GenerateArgs};
use enumlabel_core::Result;
use enumlabel_core::tooling::{BuildConfig, EnumGenerator, GenerationReport};
use tracing::{debug, info};

/// Runs the generate command.
pub fn run(cli: &Cli, args: GenerateArgs) -> Result<GenerationReport> {
    info!("Starting label codec generation");

    let config = load_config(cli, &args.dir)?;

    let mut build = BuildConfig::from_config(&args.dir, &config);
    if let Some(prefix) = args.prefix {
        build.output_prefix = prefix;
    }
    if let Some(suffix) = args.suffix {
        build.output_suffix = suffix;
    }
    build.dry_run = args.dry_run;
    debug!(?build, "Resolved build configuration");

    let flags = args.labels.to_label_config(args.emit_to_string);
    let requests = type_requests(&args.types, &flags, &config);

    let report = EnumGenerator::new(build)
        .with_command(command_line())
        .generate(&requests)?;

    for file in report.files.iter().filter(|f| !f.written) {
        println!("// {}\n{}", file.path.display(), file.source);
    }

    info!(
        package = %report.package_name,
        written = report.written_count(),
        "Label codec generation completed successfully"
    );
    Ok(report)
}
