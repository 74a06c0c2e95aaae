pub mod error;
pub mod source;

pub use error::{IngestError, Result};
pub use source::{Rows, SourceReader, SourceRow, open_source};
