//! Import service result model.

use serde::{Deserialize, Serialize};

/// One per-record message reported back by the bulk import service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportMessage {
    /// The record was created or updated; `id` is its external id.
    Created { id: String },
    /// The record was rejected.
    Error {
        row: Option<usize>,
        field: Option<String>,
        message: String,
    },
}

impl ImportMessage {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// The full result list returned by one bulk import call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub messages: Vec<ImportMessage>,
}

impl ImportOutcome {
    pub fn new(messages: Vec<ImportMessage>) -> Self {
        Self { messages }
    }

    /// True iff any message is an error. This is the whole success
    /// criterion for a run.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(ImportMessage::is_error)
    }

    pub fn created_count(&self) -> usize {
        self.messages.len() - self.error_count()
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ImportMessage> {
        self.messages.iter().filter(|m| m.is_error())
    }
}
