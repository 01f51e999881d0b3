//! Bracketed single-line format.
//!
//! ```text
//! [LEVEL] | [CATEGORY] | [errorCode]: CODE | [CorrelationId]: ID | [Context]: CTX | [Message]: MSG | [Metadata]: META
//! ```
//!
//! Section order and labels are fixed. Each section after the level is
//! printed only when its value is present and non-empty.

use crate::metadata::MetadataSerializer;
use crate::record::RenderedRecord;

const SEPARATOR: &str = " | ";

/// Render a record into one output line (no trailing newline).
pub fn render_line(record: &RenderedRecord) -> String {
    let mut sections = vec![format!("[{}]", record.level.as_str().to_uppercase())];

    if let Some(category) = record.category {
        sections.push(format!("[{category}]"));
    }
    if let Some(code) = record.error_code {
        sections.push(format!("[errorCode]: {code}"));
    }
    if let Some(id) = non_empty(&record.correlation_id) {
        sections.push(format!("[CorrelationId]: {id}"));
    }
    if let Some(context) = non_empty(&record.context) {
        sections.push(format!("[Context]: {context}"));
    }
    if !record.message.is_empty() {
        sections.push(format!("[Message]: {}", record.message));
    }
    if let Some(metadata) = record.metadata.as_ref().and_then(MetadataSerializer::serialize) {
        sections.push(format!("[Metadata]: {metadata}"));
    }

    sections.join(SEPARATOR)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
