//! The log facade.

use std::fmt;
use std::sync::Arc;

use crate::config::{LoggerConfig, TransportKind};
use crate::correlation::{CorrelationProvider, NoCorrelation};
use crate::engine::{
    create_engine, ConsoleTransport, EngineConfig, EngineFactory, LeveledEngine, LogEngine,
    Transport, TracingTransport,
};
use crate::facade::Logger;
use crate::format::render_line;
use crate::metadata::Metadata;
use crate::observability::metrics;
use crate::record::{LogEntry, LogErrorEntry, RenderedRecord};
use crate::taxonomy::{ErrorCode, LogCategory, LogLevel};

/// Structured logger with one method per log kind.
///
/// Holds an immutable minimum level and an engine created at construction.
/// Every call reads the correlation id fresh from the injected provider and
/// hands exactly one record to the engine.
pub struct LogFacade<E: LogEngine = LeveledEngine> {
    level: LogLevel,
    engine: E,
    correlation: Arc<dyn CorrelationProvider>,
}

impl LogFacade {
    /// Facade writing to stdout, without correlation ids.
    pub fn new(level: LogLevel) -> Self {
        Self::with_transport(level, ConsoleTransport::stdout(), NoCorrelation)
    }

    /// Facade writing to stdout with the given correlation provider.
    pub fn with_provider<P>(level: LogLevel, provider: P) -> Self
    where
        P: CorrelationProvider + 'static,
    {
        Self::with_transport(level, ConsoleTransport::stdout(), provider)
    }

    /// Facade on the default engine with a single custom transport.
    pub fn with_transport<T, P>(level: LogLevel, transport: T, provider: P) -> Self
    where
        T: Transport + 'static,
        P: CorrelationProvider + 'static,
    {
        Self::build(level, Box::new(transport), provider, create_engine)
    }

    /// Facade whose level and transport come from configuration.
    pub fn from_config<P>(config: &LoggerConfig, provider: P) -> Self
    where
        P: CorrelationProvider + 'static,
    {
        let transport: Box<dyn Transport> = match config.transport {
            TransportKind::Stdout => Box::new(ConsoleTransport::stdout()),
            TransportKind::Stderr => Box::new(ConsoleTransport::stderr()),
            TransportKind::Tracing => Box::new(TracingTransport),
        };
        Self::build(config.level, transport, provider, create_engine)
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl<E: LogEngine> LogFacade<E> {
    /// Facade on an engine built by `factory`.
    ///
    /// The factory receives the full engine configuration: the minimum
    /// level, the line renderer and a single stdout transport.
    pub fn with_engine<P, F>(level: LogLevel, provider: P, factory: F) -> Self
    where
        P: CorrelationProvider + 'static,
        F: EngineFactory<Engine = E>,
    {
        Self::build(level, Box::new(ConsoleTransport::stdout()), provider, factory)
    }

    fn build<P, F>(level: LogLevel, transport: Box<dyn Transport>, provider: P, factory: F) -> Self
    where
        P: CorrelationProvider + 'static,
        F: EngineFactory<Engine = E>,
    {
        let engine = factory.create(EngineConfig {
            level,
            format: render_line,
            transports: vec![transport],
        });
        Self {
            level,
            engine,
            correlation: Arc::new(provider),
        }
    }

    /// Minimum level passed to the engine.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn emit(
        &self,
        level: LogLevel,
        category: LogCategory,
        context: Option<String>,
        message: String,
        metadata: Option<Metadata>,
        error_code: Option<ErrorCode>,
    ) {
        let record = RenderedRecord {
            level,
            category: Some(category),
            context,
            message,
            correlation_id: self.correlation.get_id(),
            metadata,
            error_code,
        };
        metrics::record_emitted(level, category);
        self.engine.log(record);
    }

    fn emit_entry(&self, level: LogLevel, category: LogCategory, entry: LogEntry) {
        let LogEntry {
            context,
            message,
            metadata,
        } = entry;
        self.emit(level, category, context, message.unwrap_or_default(), metadata, None);
    }

    fn emit_error(&self, level: LogLevel, entry: LogErrorEntry) {
        let LogErrorEntry {
            context,
            message,
            metadata,
            error_code,
        } = entry;
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| error_code.default_description().to_string());
        self.emit(
            level,
            LogCategory::Exception,
            context,
            message,
            metadata,
            Some(error_code),
        );
    }
}

impl<E: LogEngine> Logger for LogFacade<E> {
    fn exception(&self, entry: LogErrorEntry) {
        self.emit_error(LogLevel::Warn, entry);
    }

    fn server_error(&self, entry: LogErrorEntry) {
        self.emit_error(LogLevel::Error, entry);
    }

    fn operational(&self, entry: LogEntry) {
        self.emit_entry(LogLevel::Info, LogCategory::Operational, entry);
    }

    fn request(&self, entry: LogEntry) {
        self.emit_entry(LogLevel::Http, LogCategory::Request, entry);
    }

    fn response(&self, entry: LogEntry) {
        self.emit_entry(LogLevel::Http, LogCategory::Response, entry);
    }

    fn service_request(&self, entry: LogEntry) {
        self.emit_entry(LogLevel::Http, LogCategory::ServiceRequest, entry);
    }

    fn service_response(&self, entry: LogEntry) {
        self.emit_entry(LogLevel::Http, LogCategory::ServiceResponse, entry);
    }

    fn system(&self, entry: LogEntry) {
        self.emit_entry(LogLevel::Verbose, LogCategory::System, entry);
    }

    fn debug(&self, entry: LogEntry) {
        self.emit_entry(LogLevel::Debug, LogCategory::Debug, entry);
    }
}

impl<E: LogEngine> fmt::Debug for LogFacade<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFacade")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
