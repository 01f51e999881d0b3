//! Default engine: threshold, format, fan out to transports.

use crate::engine::{EngineConfig, FormatFn, LogEngine, Transport};
use crate::record::RenderedRecord;
use crate::taxonomy::LogLevel;

/// Engine that drops records below its minimum level and writes the rest.
#[derive(Debug)]
pub struct LeveledEngine {
    level: LogLevel,
    format: FormatFn,
    transports: Vec<Box<dyn Transport>>,
}

impl LeveledEngine {
    pub fn new(config: EngineConfig) -> Self {
        tracing::debug!(
            level = %config.level,
            transports = config.transports.len(),
            "Log engine created"
        );
        Self {
            level: config.level,
            format: config.format,
            transports: config.transports,
        }
    }

    /// Minimum level a record needs to be written.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn transports(&self) -> &[Box<dyn Transport>] {
        &self.transports
    }
}

impl LogEngine for LeveledEngine {
    fn log(&self, record: RenderedRecord) {
        if !record.level.allows(self.level) {
            return;
        }

        let line = (self.format)(&record);
        for transport in &self.transports {
            if let Err(e) = transport.write_line(&record, &line) {
                tracing::error!(transport = ?transport, error = %e, "Failed to write log line");
            }
        }
    }
}
