use std::fmt;

use crate::error::ModelError;

/// Prefix shared by every generated sale order external id.
pub const EXTERNAL_ID_PREFIX: &str = "__export__.sale_order_";

/// A synthetic external identifier assigned to each imported record.
///
/// The shape is fixed: `__export__.sale_order_<2 lowercase letters>_<8
/// lowercase letters>`. Identifiers are random, not sequential, and are not
/// checked against existing records.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ExternalId(String);

impl ExternalId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if !is_valid_external_id(&value) {
            return Err(ModelError::InvalidExternalId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_external_id(value: &str) -> bool {
    let Some(suffix) = value.strip_prefix(EXTERNAL_ID_PREFIX) else {
        return false;
    };
    let bytes = suffix.as_bytes();
    // <2 letters> '_' <8 letters>
    if bytes.len() != 11 || bytes[2] != b'_' {
        return false;
    }
    bytes[..2]
        .iter()
        .chain(&bytes[3..])
        .all(u8::is_ascii_lowercase)
}
