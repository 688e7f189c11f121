use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnumlabelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{prefix} is not a prefix of {name}")]
    PrefixMismatch { prefix: String, name: String },

    #[error("Multiple constants map to serialized value {label}: {first} and {second}")]
    LabelCollision {
        label: String,
        first: String,
        second: String,
    },

    #[error("Type {type_name} has no declared constants")]
    EmptyType { type_name: String },

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Emit error for type {type_name}: {message}")]
    Emit { type_name: String, message: String },

    #[error("Invalid package at {path}: {message}")]
    InvalidPackage { path: PathBuf, message: String },

    #[error("Type not found: {type_name}")]
    TypeNotFound { type_name: String },

    #[error("No recognized constants for type {type_name}: {message}")]
    NoConstants { type_name: String, message: String },
}

pub type Result<T> = std::result::Result<T, EnumlabelError>;

impl EnumlabelError {
    pub fn config(message: impl Into<String>) -> Self {
        EnumlabelError::Config(message.into())
    }

    pub fn prefix_mismatch(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        EnumlabelError::PrefixMismatch {
            prefix: prefix.into(),
            name: name.into(),
        }
    }

    pub fn emit(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        EnumlabelError::Emit {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_package(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        EnumlabelError::InvalidPackage {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        EnumlabelError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    pub fn no_constants(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        EnumlabelError::NoConstants {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
