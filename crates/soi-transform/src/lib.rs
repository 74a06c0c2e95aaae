pub mod datetime;
pub mod error;
pub mod ids;
pub mod row;

pub use datetime::reformat_date;
pub use error::{Result, TransformError};
pub use ids::{LetterSource, RandomLetters, ScriptedLetters, generate_record_id};
pub use row::RowTransformer;
