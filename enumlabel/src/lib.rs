//! Label codecs for enumerated integer types.
//!
//! Generated files refer to this crate for their runtime types, so it must be
//! a regular dependency of any crate that `include!`s them.

pub use enumlabel_core::runtime;
pub use enumlabel_core::runtime::{LabelError, ScanValue};
pub use enumlabel_core::{
    EmitOptions, EnumType, EnumlabelConfig, EnumlabelError, GeneratedSource, LabelConfig,
    LabelEntry, config, generate, generate_with, tooling,
};
pub use serde_json;
