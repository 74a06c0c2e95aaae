//! Sale order import preparation.
//!
//! This crate owns everything between the external system's CSV export and
//! the host platform's bulk import facility:
//!
//! - **Request building** (`request`): serializing transformed rows into
//!   the single CSV buffer the service consumes
//! - **Service seam** (`service`): the [`BulkImportService`] trait the
//!   host platform implements
//! - **Pipeline** (`pipeline`): the one scheduled operation, open →
//!   transform → submit → inspect
//!
//! # Error Handling
//!
//! This crate uses a unified [`ImportError`] built with `thiserror`;
//! ingestion and transformation errors convert into it. File-access
//! failures are recovered inside the pipeline and never surface as errors.

pub mod error;
pub mod pipeline;
pub mod request;
pub mod service;

pub use error::{ImportError, Result};
pub use pipeline::{RunReport, SaleOrderImporter};
pub use request::{CSV_FILE_TYPE, ImportOptions, ImportRequest};
pub use service::BulkImportService;
