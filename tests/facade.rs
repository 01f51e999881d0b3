//! Facade mapping tests: one engine call per method, with the expected level and category.

use log_facade::format::render_line;
use log_facade::{
    ErrorCode, LogCategory, LogEntry, LogErrorEntry, LogFacade, LogLevel, Logger, Metadata,
    RenderedRecord,
};
use serde_json::json;

mod common;

use common::{fixed_correlation, RecordingEngine, CORRELATION_ID};

fn logger() -> LogFacade<RecordingEngine> {
    LogFacade::with_engine(LogLevel::Verbose, fixed_correlation(), RecordingEngine::new)
}

fn test_metadata() -> Metadata {
    Metadata::from(json!({
        "data": "TEST",
        "description": "Testing Metadata",
        "value": 12,
    }))
}

fn single_record(logger: &LogFacade<RecordingEngine>) -> RenderedRecord {
    let records = logger.engine().records();
    assert_eq!(records.len(), 1, "expected exactly one engine call");
    records.into_iter().next().unwrap()
}

#[test]
fn test_engine_receives_configured_level() {
    for level in LogLevel::ALL {
        let logger = LogFacade::with_engine(level, fixed_correlation(), RecordingEngine::new);
        assert_eq!(logger.engine().level, level);
        assert_eq!(logger.engine().transport_count, 1);
        assert_eq!(logger.level(), level);
    }
}

#[test]
fn test_engine_receives_line_renderer() {
    let logger = logger();
    let record = RenderedRecord {
        category: Some(LogCategory::System),
        ..RenderedRecord::new(LogLevel::Verbose)
    };
    assert_eq!((logger.engine().format)(&record), render_line(&record));
}

#[test]
fn test_exception() {
    let logger = logger();
    logger.exception(
        LogErrorEntry::new(ErrorCode::InvalidBody)
            .context("testing.context")
            .metadata(test_metadata()),
    );

    assert_eq!(
        single_record(&logger),
        RenderedRecord {
            level: LogLevel::Warn,
            category: Some(LogCategory::Exception),
            context: Some("testing.context".into()),
            message: "Invalid body for HTTP request".into(),
            correlation_id: Some(CORRELATION_ID.into()),
            metadata: Some(test_metadata()),
            error_code: Some(ErrorCode::InvalidBody),
        }
    );
}

#[test]
fn test_server_error() {
    let logger = logger();
    logger.server_error(LogErrorEntry::new(ErrorCode::DbInvalidParams));

    let record = single_record(&logger);
    assert_eq!(record.level, LogLevel::Error);
    assert_eq!(record.category, Some(LogCategory::Exception));
    assert_eq!(
        record.message,
        "It is not possible to connect to the database, invalid parameters"
    );
    assert_eq!(record.error_code, Some(ErrorCode::DbInvalidParams));
    assert_eq!(record.context, None);
    assert_eq!(record.metadata, None);
}

#[test]
fn test_operational() {
    let logger = logger();
    logger.operational(
        LogEntry::new()
            .message("Message of operational log")
            .context("testing.context"),
    );

    assert_eq!(
        single_record(&logger),
        RenderedRecord {
            level: LogLevel::Info,
            category: Some(LogCategory::Operational),
            context: Some("testing.context".into()),
            message: "Message of operational log".into(),
            correlation_id: Some(CORRELATION_ID.into()),
            metadata: None,
            error_code: None,
        }
    );
}

#[test]
fn test_request() {
    let logger = logger();
    logger.request(LogEntry::new().context("testing.context").metadata(test_metadata()));

    let record = single_record(&logger);
    assert_eq!(record.level, LogLevel::Http);
    assert_eq!(record.category, Some(LogCategory::Request));
    assert_eq!(record.message, "");
    assert_eq!(record.metadata, Some(test_metadata()));
    assert_eq!(record.error_code, None);
}

#[test]
fn test_response() {
    let logger = logger();
    logger.response(LogEntry::new().context("testing.context").metadata(test_metadata()));

    let record = single_record(&logger);
    assert_eq!(record.level, LogLevel::Http);
    assert_eq!(record.category, Some(LogCategory::Response));
    assert_eq!(record.message, "");
    assert_eq!(record.correlation_id.as_deref(), Some(CORRELATION_ID));
}

#[test]
fn test_service_request() {
    let logger = logger();
    logger.service_request(LogEntry::new().context("testing.context"));

    let record = single_record(&logger);
    assert_eq!(record.level, LogLevel::Http);
    assert_eq!(record.category, Some(LogCategory::ServiceRequest));
    assert_eq!(record.message, "");
    assert_eq!(record.metadata, None);
}

#[test]
fn test_service_response() {
    let logger = logger();
    logger.service_response(LogEntry::new().metadata(vec![1, 2, 3]));

    let record = single_record(&logger);
    assert_eq!(record.level, LogLevel::Http);
    assert_eq!(record.category, Some(LogCategory::ServiceResponse));
    assert_eq!(record.context, None);
    assert_eq!(record.metadata, Some(Metadata::from(json!([1, 2, 3]))));
}

#[test]
fn test_system() {
    let logger = logger();
    logger.system(
        LogEntry::new()
            .message("This is a SYSTEM MESSAGE")
            .context("testing.context")
            .metadata(Metadata::empty_object()),
    );

    let record = single_record(&logger);
    assert_eq!(record.level, LogLevel::Verbose);
    assert_eq!(record.category, Some(LogCategory::System));
    assert_eq!(record.message, "This is a SYSTEM MESSAGE");
    assert_eq!(record.metadata, Some(Metadata::empty_object()));
}

#[test]
fn test_debug() {
    let logger = logger();
    logger.debug(LogEntry::new().message("This is a message").context("testing.context"));

    let record = single_record(&logger);
    assert_eq!(record.level, LogLevel::Debug);
    assert_eq!(record.category, Some(LogCategory::Debug));
    assert_eq!(record.message, "This is a message");
}

#[test]
fn test_facade_passes_records_below_threshold_to_engine() {
    // Filtering belongs to the engine; the facade forwards everything.
    let logger = LogFacade::with_engine(LogLevel::Error, fixed_correlation(), RecordingEngine::new);
    logger.debug(LogEntry::new());
    logger.system(LogEntry::new());

    let levels: Vec<LogLevel> = logger.engine().records().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![LogLevel::Debug, LogLevel::Verbose]);
}

#[test]
fn test_correlation_id_is_read_on_every_call() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let counter = Arc::new(AtomicUsize::new(0));
    let provider = {
        let counter = counter.clone();
        move || Some(format!("req-{}", counter.fetch_add(1, Ordering::SeqCst)))
    };
    let logger = LogFacade::with_engine(LogLevel::Verbose, provider, RecordingEngine::new);

    logger.request(LogEntry::new());
    logger.response(LogEntry::new());

    let ids: Vec<Option<String>> = logger
        .engine()
        .records()
        .into_iter()
        .map(|r| r.correlation_id)
        .collect();
    assert_eq!(ids, vec![Some("req-0".into()), Some("req-1".into())]);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[test]
fn test_logger_trait_object() {
    let logger = logger();
    let dyn_logger: &dyn Logger = &logger;
    dyn_logger.operational(LogEntry::from("via trait object"));

    assert_eq!(single_record(&logger).message, "via trait object");
}
