pub mod error;
pub mod ids;
pub mod mapping;
pub mod outcome;
pub mod row;

pub use error::{ModelError, Result};
pub use ids::{EXTERNAL_ID_PREFIX, ExternalId};
pub use mapping::{
    FieldMapping, FieldTransform, HOST_DATE_FORMAT, ImportMapping, SOURCE_DATE_FORMAT,
};
pub use outcome::{ImportMessage, ImportOutcome};
pub use row::{TargetRow, TargetValue, UNSET_MARKER};
