//! Generator of label codecs for enumerated integer types.
//!
//! Given the declared constant names of an enum (or of an integer newtype
//! with associated constants), [`generate`] derives one textual label per
//! constant and emits Rust source implementing rendering, JSON encoding and
//! decoding, and untyped column scanning for that type.
//!
//! ```
//! use enumlabel_core::{EnumType, LabelConfig, generate};
//!
//! let ty = EnumType::new(
//!     "CustomStatus",
//!     "model",
//!     vec!["CustomStatusOK".to_string(), "CustomStatusNoFun".to_string()],
//! )
//! .unwrap();
//! let config = LabelConfig::builder()
//!     .prefix_to_drop("CustomStatus")
//!     .snake_case(true)
//!     .upper_case(true)
//!     .build();
//! let generated = generate(&config, &ty).unwrap();
//! assert!(generated.source.contains("\"NO_FUN\""));
//! ```

pub mod casing;
pub mod collision;
pub mod config;
pub mod emit;
pub mod error;
pub mod label;
pub mod pipeline;
pub mod runtime;
pub mod tooling;
pub mod types;

pub use casing::{to_snake_label, to_upper_label};
pub use collision::{CollisionGuard, build_label_table};
pub use config::EnumlabelConfig;
pub use emit::{EmitOptions, emit, emit_with};
pub use error::{EnumlabelError, Result};
pub use label::{LabelConfig, derive_label, drop_prefix};
pub use pipeline::{generate, generate_with};
pub use types::{EnumType, GeneratedSource, LabelEntry};

// Generated code names `serde_json` through the runtime crate path.
pub use serde_json;
