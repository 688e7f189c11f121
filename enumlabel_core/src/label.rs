//! Label derivation: declared constant name -> serialized label.

use crate::casing::{to_snake_label, to_upper_label};
use crate::error::{EnumlabelError, Result};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Rules applied uniformly to every constant of one type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Builder)]
pub struct LabelConfig {
    /// Prefix every declared name must carry; stripped before anything else.
    #[builder(into)]
    #[serde(default)]
    pub prefix_to_drop: Option<String>,
    /// Insert `_` at word boundaries and lowercase.
    #[builder(default)]
    #[serde(default)]
    pub snake_case: bool,
    /// Uppercase the final label.
    #[builder(default)]
    #[serde(default)]
    pub upper_case: bool,
    /// Also emit a public `to_label_string` passthrough on the type.
    #[builder(default)]
    #[serde(default)]
    pub emit_to_string: bool,
}

impl LabelConfig {
    /// The configured prefix, ignoring an empty string.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix_to_drop.as_deref().filter(|p| !p.is_empty())
    }
}

/// Strips `prefix` from the start of `name`.
pub fn drop_prefix<'a>(name: &'a str, prefix: &str) -> Result<&'a str> {
    name.strip_prefix(prefix)
        .ok_or_else(|| EnumlabelError::prefix_mismatch(prefix, name))
}

/// Derives the serialized label for one declared name.
///
/// Steps run in a fixed order: prefix removal, then word-boundary
/// conversion, then upper-casing.
pub fn derive_label(declared_name: &str, config: &LabelConfig) -> Result<String> {
    let remainder = match config.prefix() {
        Some(prefix) => drop_prefix(declared_name, prefix)?,
        None => declared_name,
    };

    let label = if config.snake_case {
        to_snake_label(remainder)
    } else {
        remainder.to_string()
    };

    Ok(if config.upper_case {
        to_upper_label(&label)
    } else {
        label
    })
}
