//! Category tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tag identifying which facade method produced a record.
///
/// Never supplied by callers; each facade method fixes its own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogCategory {
    Debug,
    System,
    Request,
    Response,
    ServiceRequest,
    ServiceResponse,
    Operational,
    Exception,
}

impl LogCategory {
    pub const ALL: [LogCategory; 8] = [
        LogCategory::Debug,
        LogCategory::System,
        LogCategory::Request,
        LogCategory::Response,
        LogCategory::ServiceRequest,
        LogCategory::ServiceResponse,
        LogCategory::Operational,
        LogCategory::Exception,
    ];

    /// Tag as it appears inside the rendered `[CATEGORY]` section.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogCategory::Debug => "DEBUG",
            LogCategory::System => "SYSTEM",
            LogCategory::Request => "REQUEST",
            LogCategory::Response => "RESPONSE",
            LogCategory::ServiceRequest => "SERVICE_REQUEST",
            LogCategory::ServiceResponse => "SERVICE_RESPONSE",
            LogCategory::Operational => "OPERATIONAL",
            LogCategory::Exception => "EXCEPTION",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for LogCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
