//! Types used by generated label codecs at runtime.
//!
//! Generated files refer to these through the `enumlabel` facade crate
//! (`::enumlabel::runtime::LabelError` and friends), so this module must stay
//! free of generator-only dependencies in its public signatures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a generated render/encode/decode/scan operation.
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("invalid {type_name}: {value}")]
    InvalidValue {
        type_name: &'static str,
        value: String,
    },

    #[error("invalid {type_name} {label:?}")]
    InvalidLabel {
        type_name: &'static str,
        label: String,
    },

    #[error("{type_name} should be a string, got {payload}")]
    NotAString {
        type_name: &'static str,
        payload: String,
    },

    #[error("can't scan {found} into type {type_name}")]
    ScanMismatch {
        found: &'static str,
        type_name: &'static str,
    },

    #[error("renderer gives more than one {type_name} the label {label:?}")]
    RenderCollision {
        type_name: &'static str,
        label: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LabelError {
    pub fn invalid_value(type_name: &'static str, value: impl Into<String>) -> Self {
        LabelError::InvalidValue {
            type_name,
            value: value.into(),
        }
    }

    pub fn invalid_label(type_name: &'static str, label: impl Into<String>) -> Self {
        LabelError::InvalidLabel {
            type_name,
            label: label.into(),
        }
    }

    pub fn not_a_string(type_name: &'static str, payload: impl Into<String>) -> Self {
        LabelError::NotAString {
            type_name,
            payload: payload.into(),
        }
    }

    pub fn render_collision(type_name: &'static str, label: impl Into<String>) -> Self {
        LabelError::RenderCollision {
            type_name,
            label: label.into(),
        }
    }

    pub fn scan_mismatch(found: &'static str, type_name: &'static str) -> Self {
        LabelError::ScanMismatch { found, type_name }
    }
}

/// A loosely typed column value, as handed over by a database driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScanValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl ScanValue {
    /// Name of the value's shape, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanValue::Null => "null",
            ScanValue::Bool(_) => "bool",
            ScanValue::Int(_) => "i64",
            ScanValue::Float(_) => "f64",
            ScanValue::Text(_) => "string",
            ScanValue::Bytes(_) => "bytes",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScanValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<String> for ScanValue {
    fn from(value: String) -> Self {
        ScanValue::Text(value)
    }
}

impl From<&str> for ScanValue {
    fn from(value: &str) -> Self {
        ScanValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for ScanValue {
    fn from(value: Vec<u8>) -> Self {
        ScanValue::Bytes(value)
    }
}

impl From<i64> for ScanValue {
    fn from(value: i64) -> Self {
        ScanValue::Int(value)
    }
}
