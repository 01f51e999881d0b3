//! Structured logging facade.
//!
//! Emits categorized, leveled, correlation-tagged lines to a single sink:
//!
//! ```text
//! [HTTP] | [REQUEST] | [CorrelationId]: f96d1ca1 | [Context]: loggerRequestMiddleware | [Metadata]: {"path":"/users"}
//! ```
//!
//! ```no_run
//! use log_facade::{LogEntry, LogFacade, LogLevel, Logger};
//!
//! let logger = LogFacade::new(LogLevel::Verbose);
//! logger.system(
//!     LogEntry::new()
//!         .context("server.listen")
//!         .message("Server running at port 4000 in local"),
//! );
//! ```

// Core pipeline
pub mod facade;
pub mod format;
pub mod metadata;
pub mod record;
pub mod taxonomy;

// Collaborators
pub mod correlation;
pub mod engine;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::{LoggerConfig, TransportKind};
pub use correlation::{CorrelationProvider, NoCorrelation, TaskLocalCorrelation};
pub use engine::{EngineConfig, LeveledEngine, LogEngine, Transport};
pub use facade::{LogFacade, Logger};
pub use metadata::{Metadata, MetadataSerializer};
pub use record::{LogEntry, LogErrorEntry, RenderedRecord};
pub use taxonomy::{ErrorCode, LogCategory, LogLevel};
