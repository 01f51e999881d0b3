//! Normalized record handed to the engine.

use crate::metadata::Metadata;
use crate::taxonomy::{ErrorCode, LogCategory, LogLevel};

/// An entry enriched with level, category and correlation id.
///
/// Fields the caller did not supply stay `None`; the line renderer only
/// prints sections whose value is present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRecord {
    pub level: LogLevel,
    pub category: Option<LogCategory>,
    pub context: Option<String>,
    pub message: String,
    pub correlation_id: Option<String>,
    pub metadata: Option<Metadata>,
    pub error_code: Option<ErrorCode>,
}

impl RenderedRecord {
    /// A bare record with only a level set.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            category: None,
            context: None,
            message: String::new(),
            correlation_id: None,
            metadata: None,
            error_code: None,
        }
    }
}
