//! Entries and records.
//!
//! # Data Flow
//! ```text
//! LogEntry / LogErrorEntry (caller)
//!     → facade (adds level, category, correlation id, default message)
//!     → RenderedRecord
//!     → engine (threshold, format, transports)
//! ```

pub mod entry;
pub mod rendered;

pub use entry::{LogEntry, LogErrorEntry};
pub use rendered::RenderedRecord;
