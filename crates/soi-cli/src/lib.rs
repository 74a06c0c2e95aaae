//! CLI library components for the sale order importer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
