//! Fail-fast detection of constants that serialize identically.

use crate::error::{EnumlabelError, Result};
use crate::label::{LabelConfig, derive_label};
use crate::types::{EnumType, LabelEntry};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Remembers every label admitted for one type and the name that produced it.
#[derive(Debug, Default)]
pub struct CollisionGuard {
    seen: HashMap<String, String>,
}

impl CollisionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `label` for `declared_name`, failing if the label was already taken.
    pub fn admit(&mut self, declared_name: &str, label: &str) -> Result<()> {
        if let Some(first) = self.seen.get(label) {
            return Err(EnumlabelError::LabelCollision {
                label: label.to_string(),
                first: first.clone(),
                second: declared_name.to_string(),
            });
        }
        self.seen
            .insert(label.to_string(), declared_name.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Derives the ordered label table for one type.
///
/// Stops at the first prefix mismatch or label collision; no partial table
/// is returned.
pub fn build_label_table(enum_type: &EnumType, config: &LabelConfig) -> Result<Vec<LabelEntry>> {
    let mut guard = CollisionGuard::new();
    let mut entries = Vec::with_capacity(enum_type.declared_names().len());

    for declared in enum_type.declared_names() {
        let label = derive_label(declared, config)?;
        trace!(type_name = %enum_type.name(), %declared, %label, "Derived label");
        guard.admit(declared, &label)?;
        entries.push(LabelEntry::new(declared.clone(), label));
    }

    debug!(
        type_name = %enum_type.name(),
        label_count = entries.len(),
        "Label table built"
    );
    Ok(entries)
}
