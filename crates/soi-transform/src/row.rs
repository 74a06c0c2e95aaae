//! Mapping-driven row transformation.

use soi_ingest::SourceRow;
use soi_model::{FieldTransform, ImportMapping, TargetRow};

use crate::datetime::reformat_date;
use crate::error::{Result, TransformError};
use crate::ids::{LetterSource, generate_record_id};

/// Applies an [`ImportMapping`] to source rows.
///
/// Each transformed row gets a freshly generated id in the mapping's id
/// field; every target field without a mapping entry stays unset.
#[derive(Debug, Clone)]
pub struct RowTransformer {
    mapping: ImportMapping,
    target_fields: Vec<String>,
}

impl RowTransformer {
    pub fn new(mapping: ImportMapping) -> Self {
        let target_fields = mapping.target_fields();
        Self {
            mapping,
            target_fields,
        }
    }

    pub fn mapping(&self) -> &ImportMapping {
        &self.mapping
    }

    /// Target field names in header order, id field first.
    pub fn target_fields(&self) -> &[String] {
        &self.target_fields
    }

    /// Transform one source row.
    ///
    /// Any failure is fatal for the run; there is no per-row skip.
    pub fn transform(
        &self,
        row: &SourceRow,
        letters: &mut dyn LetterSource,
    ) -> Result<TargetRow> {
        let mut target = TargetRow::unset(&self.target_fields);
        let id = generate_record_id(letters)?;
        target.set(&self.mapping.id_field, id.as_str())?;
        for field in &self.mapping.fields {
            let raw = row.get(&field.source_column).ok_or_else(|| {
                TransformError::MissingColumn(field.source_column.clone())
            })?;
            let value = match &field.transform {
                FieldTransform::Verbatim => raw.to_string(),
                FieldTransform::Date { from, to } => reformat_date(raw, from, to)?,
            };
            target.set(&field.target_field, value)?;
        }
        Ok(target)
    }
}
