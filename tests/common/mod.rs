//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use log_facade::engine::{EngineConfig, FormatFn, LogEngine, Transport};
use log_facade::{LogLevel, RenderedRecord};

/// Correlation id returned by [`fixed_correlation`].
pub const CORRELATION_ID: &str = "135f5dc6-428e-42cd-af57-17d8d5bd215f";

/// Provider that always returns [`CORRELATION_ID`].
pub fn fixed_correlation() -> impl Fn() -> Option<String> + Send + Sync + 'static {
    || Some(CORRELATION_ID.to_string())
}

/// Engine that keeps the configuration it was created with and every record it receives.
pub struct RecordingEngine {
    pub level: LogLevel,
    pub format: FormatFn,
    pub transport_count: usize,
    records: Mutex<Vec<RenderedRecord>>,
}

impl RecordingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            level: config.level,
            format: config.format,
            transport_count: config.transports.len(),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<RenderedRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl LogEngine for RecordingEngine {
    fn log(&self, record: RenderedRecord) {
        self.records.lock().unwrap().push(record);
    }
}

/// Transport collecting lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryTransport {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Transport for MemoryTransport {
    fn write_line(&self, _record: &RenderedRecord, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
