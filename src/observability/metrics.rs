//! Record counters.
//!
//! # Metrics
//! - `log_facade_records_total` (counter): records handed to the engine, by level and category
//!
//! # Design Decisions
//! - Counted before the engine's threshold, so filtered records still show up
//! - No recorder is installed here; without one every update is a no-op

use crate::taxonomy::{LogCategory, LogLevel};

pub const RECORDS_TOTAL: &str = "log_facade_records_total";

/// Count one record.
pub fn record_emitted(level: LogLevel, category: LogCategory) {
    ::metrics::counter!(
        RECORDS_TOTAL,
        "level" => level.as_str(),
        "category" => category.as_str()
    )
    .increment(1);
}
