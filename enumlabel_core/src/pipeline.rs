//! One generation pass: declared names -> label table -> source text.

use crate::collision::build_label_table;
use crate::emit::{EmitOptions, emit_with};
use crate::error::Result;
use crate::label::LabelConfig;
use crate::types::{EnumType, GeneratedSource};
use tracing::info;

/// Generates the label codec for `enum_type` with default emit options.
pub fn generate(config: &LabelConfig, enum_type: &EnumType) -> Result<GeneratedSource> {
    generate_with(&EmitOptions::default(), config, enum_type)
}

/// Generates the label codec for `enum_type`.
///
/// Either the whole source is returned or nothing is: prefix mismatches and
/// label collisions abort before any text is rendered.
pub fn generate_with(
    options: &EmitOptions,
    config: &LabelConfig,
    enum_type: &EnumType,
) -> Result<GeneratedSource> {
    info!(
        type_name = %enum_type.name(),
        package = %enum_type.package_name(),
        constant_count = enum_type.declared_names().len(),
        "Generating label codec"
    );

    let entries = build_label_table(enum_type, config)?;
    let source = emit_with(
        options,
        enum_type.name(),
        enum_type.package_name(),
        &entries,
        config.emit_to_string,
    )?;

    Ok(GeneratedSource {
        type_name: enum_type.name().to_string(),
        source,
    })
}
