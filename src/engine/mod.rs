//! Leveled logging engine.
//!
//! # Data Flow
//! ```text
//! EngineConfig { level, format, transports }
//!     → EngineFactory::create (once, at facade construction)
//!     → LogEngine::log(record)
//!         → threshold check (leveled.rs)
//!         → format(record) → line
//!         → transport.rs (console stream or tracing event)
//! ```
//!
//! # Design Decisions
//! - The facade only depends on the `LogEngine` shape; tests inject recording engines
//! - Threshold logic lives in the engine, never in the facade
//! - Transport failures are reported as diagnostics and never reach the caller

pub mod leveled;
pub mod transport;

use std::fmt;

use crate::record::RenderedRecord;
use crate::taxonomy::LogLevel;

pub use leveled::LeveledEngine;
pub use transport::{ConsoleStream, ConsoleTransport, Transport, TracingTransport, LINE_TARGET};

/// Format function registered with the engine.
pub type FormatFn = fn(&RenderedRecord) -> String;

/// Configuration an engine is created from.
pub struct EngineConfig {
    /// Minimum level; records below it are dropped by the engine.
    pub level: LogLevel,
    pub format: FormatFn,
    pub transports: Vec<Box<dyn Transport>>,
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("level", &self.level)
            .field("transports", &self.transports)
            .finish_non_exhaustive()
    }
}

/// Sink accepting normalized records.
pub trait LogEngine: Send + Sync {
    fn log(&self, record: RenderedRecord);
}

/// Builds an engine from its configuration.
pub trait EngineFactory {
    type Engine: LogEngine;

    fn create(self, config: EngineConfig) -> Self::Engine;
}

impl<F, E> EngineFactory for F
where
    F: FnOnce(EngineConfig) -> E,
    E: LogEngine,
{
    type Engine = E;

    fn create(self, config: EngineConfig) -> E {
        self(config)
    }
}

/// Create the default engine.
pub fn create_engine(config: EngineConfig) -> LeveledEngine {
    LeveledEngine::new(config)
}
