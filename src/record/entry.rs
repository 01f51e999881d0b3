//! Caller-supplied entries.

use crate::metadata::Metadata;
use crate::taxonomy::ErrorCode;

/// Data for one non-error log call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogEntry {
    /// Logical origin, e.g. a module or function name.
    pub context: Option<String>,
    /// Human-readable description. Absent renders no `[Message]` section.
    pub message: Option<String>,
    pub metadata: Option<Metadata>,
}

impl LogEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<Metadata>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

/// Data for one error log call.
#[derive(Debug, Clone, PartialEq)]
pub struct LogErrorEntry {
    pub context: Option<String>,
    /// Falls back to the code's default description when absent or empty.
    pub message: Option<String>,
    pub metadata: Option<Metadata>,
    pub error_code: ErrorCode,
}

impl LogErrorEntry {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            context: None,
            message: None,
            metadata: None,
            error_code,
        }
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<Metadata>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

impl From<&str> for LogEntry {
    fn from(message: &str) -> Self {
        LogEntry::new().message(message)
    }
}

impl From<ErrorCode> for LogErrorEntry {
    fn from(error_code: ErrorCode) -> Self {
        LogErrorEntry::new(error_code)
    }
}
