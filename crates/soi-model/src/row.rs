//! Target row model.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ModelError;

/// Textual marker the host platform reads as "no value".
pub const UNSET_MARKER: &str = "False";

/// A single target field value.
///
/// Fields no mapping entry populates stay [`TargetValue::Unset`] and render
/// as the host platform's absent marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetValue {
    #[default]
    Unset,
    Text(String),
}

impl TargetValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for TargetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str(UNSET_MARKER),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One transformed row, keyed by target field name.
#[derive(Debug, Clone)]
pub struct TargetRow {
    values: BTreeMap<String, TargetValue>,
}

impl TargetRow {
    /// A row with every given field explicitly unset.
    pub fn unset(fields: &[String]) -> Self {
        Self {
            values: fields
                .iter()
                .map(|f| (f.clone(), TargetValue::Unset))
                .collect(),
        }
    }

    /// Set a field that was declared at construction time.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), ModelError> {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = TargetValue::Text(value.into());
                Ok(())
            }
            None => Err(ModelError::UnknownTargetField(field.to_string())),
        }
    }

    pub fn get(&self, field: &str) -> Option<&TargetValue> {
        self.values.get(field)
    }

    /// Values in the given header order, unset fields rendered as the
    /// absent marker.
    pub fn render(&self, fields: &[String]) -> Vec<String> {
        fields
            .iter()
            .map(|f| {
                self.values
                    .get(f)
                    .map_or_else(|| UNSET_MARKER.to_string(), ToString::to_string)
            })
            .collect()
    }
}
