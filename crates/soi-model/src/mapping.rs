//! Data-driven source-to-target field mapping.
//!
//! The mapping between the external export's columns and the host schema's
//! fields is configuration, not code: an ordered list of
//! `(source_column, target_field, transform)` entries. The default
//! sale order mapping covers the two columns the external system exports.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Date format used by the external system's export (`01-31-2024`).
pub const SOURCE_DATE_FORMAT: &str = "%m-%d-%Y";
/// Date format expected by the host platform (`2024-01-31`).
pub const HOST_DATE_FORMAT: &str = "%Y-%m-%d";

/// How a source value is rewritten into its target field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldTransform {
    /// Copy the source value unchanged.
    Verbatim,
    /// Reparse a date from one textual format into another.
    Date { from: String, to: String },
}

/// One column-to-field mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapping {
    pub source_column: String,
    pub target_field: String,
    pub transform: FieldTransform,
}

impl FieldMapping {
    pub fn verbatim(source_column: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self {
            source_column: source_column.into(),
            target_field: target_field.into(),
            transform: FieldTransform::Verbatim,
        }
    }

    pub fn date(
        source_column: impl Into<String>,
        target_field: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            source_column: source_column.into(),
            target_field: target_field.into(),
            transform: FieldTransform::Date {
                from: from.into(),
                to: to.into(),
            },
        }
    }
}

/// Full mapping configuration for one import target schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportMapping {
    /// Host schema the rows are imported into (e.g. `sale.order`).
    pub schema: String,
    /// Name of the synthetic identifier field, always first in the header.
    pub id_field: String,
    pub fields: Vec<FieldMapping>,
}

impl ImportMapping {
    pub fn new(
        schema: impl Into<String>,
        id_field: impl Into<String>,
        fields: Vec<FieldMapping>,
    ) -> Result<Self, ModelError> {
        let mapping = Self {
            schema: schema.into(),
            id_field: id_field.into(),
            fields,
        };
        mapping.validate()?;
        Ok(mapping)
    }

    /// The default mapping for sale order exports: the customer reference
    /// is copied verbatim into `partner_id` and the end date is reparsed
    /// from the external format into the host format as `validity_date`.
    pub fn sale_order() -> Self {
        Self {
            schema: "sale.order".to_string(),
            id_field: "id".to_string(),
            fields: vec![
                FieldMapping::verbatim("customer", "partner_id"),
                FieldMapping::date(
                    "end_date",
                    "validity_date",
                    SOURCE_DATE_FORMAT,
                    HOST_DATE_FORMAT,
                ),
            ],
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.schema.trim().is_empty() || self.id_field.trim().is_empty() {
            return Err(ModelError::EmptyFieldName);
        }
        let mut seen = vec![self.id_field.as_str()];
        for field in &self.fields {
            if field.source_column.trim().is_empty() || field.target_field.trim().is_empty() {
                return Err(ModelError::EmptyFieldName);
            }
            if seen.contains(&field.target_field.as_str()) {
                return Err(ModelError::DuplicateTargetField(
                    field.target_field.clone(),
                ));
            }
            seen.push(field.target_field.as_str());
        }
        Ok(())
    }

    /// Target field names in header order, identifier field first.
    pub fn target_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.fields.len() + 1);
        fields.push(self.id_field.clone());
        fields.extend(self.fields.iter().map(|f| f.target_field.clone()));
        fields
    }

    /// Source column names the input file must provide.
    pub fn source_columns(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.source_column.as_str()).collect()
    }
}
