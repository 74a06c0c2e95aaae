//! Date reformatting between the external system and the host platform.
//!
//! The external export carries dates as `MM-DD-YYYY`; the host platform
//! expects `YYYY-MM-DD`. Parsing is strict: a value that does not match the
//! source format is a hard error, never a per-row skip, so a malformed
//! export is rejected before anything is submitted.

use chrono::NaiveDate;

use crate::error::{Result, TransformError};

/// Reparse `value` from the `from` format and render it in the `to` format.
///
/// The calendar date is preserved exactly; only the textual form changes.
pub fn reformat_date(value: &str, from: &str, to: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(value.trim(), from).map_err(|_| {
        TransformError::DateFormat {
            value: value.to_string(),
            format: from.to_string(),
        }
    })?;
    Ok(date.format(to).to_string())
}
