use crate::error::{EnumlabelError, Result};
use serde::{Deserialize, Serialize};

/// An enumerated integer type and its constants, as found by discovery.
///
/// `declared_names` is in declaration order with one entry per distinct
/// value. Construction validates that the list is non-empty and that every
/// name is a Rust identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EnumTypeFields")]
pub struct EnumType {
    name: String,
    package_name: String,
    declared_names: Vec<String>,
}

impl EnumType {
    pub fn new(
        name: impl Into<String>,
        package_name: impl Into<String>,
        declared_names: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name)?;

        if declared_names.is_empty() {
            return Err(EnumlabelError::EmptyType { type_name: name });
        }
        for declared in &declared_names {
            validate_identifier(declared)?;
        }

        Ok(Self {
            name,
            package_name: package_name.into(),
            declared_names,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn declared_names(&self) -> &[String] {
        &self.declared_names
    }
}

/// Unvalidated wire form of [`EnumType`]; deserialization goes through
/// [`EnumType::new`].
#[derive(Deserialize)]
struct EnumTypeFields {
    name: String,
    package_name: String,
    declared_names: Vec<String>,
}

impl TryFrom<EnumTypeFields> for EnumType {
    type Error = EnumlabelError;

    fn try_from(fields: EnumTypeFields) -> Result<Self> {
        EnumType::new(fields.name, fields.package_name, fields.declared_names)
    }
}

/// One declared constant paired with its serialized label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelEntry {
    pub declared_name: String,
    pub label: String,
}

impl LabelEntry {
    pub fn new(declared_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            declared_name: declared_name.into(),
            label: label.into(),
        }
    }
}

/// Rendered companion source for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub type_name: String,
    pub source: String,
}

/// Checks that `name` parses as a single Rust identifier.
pub(crate) fn validate_identifier(name: &str) -> Result<()> {
    syn::parse_str::<syn::Ident>(name)
        .map(|_| ())
        .map_err(|_| EnumlabelError::InvalidIdentifier(name.to_string()))
}
