//! log-facade CLI
//!
//! Emits one structured line, e.g. from shell scripts that need to match the
//! format of the services around them.
//!
//! ```text
//! log-facade --correlation-id 135f5dc6 exception --error-code INVALID_BODY --context users.create
//! [WARN] | [EXCEPTION] | [errorCode]: INVALID_BODY | [CorrelationId]: 135f5dc6 | [Context]: users.create | [Message]: Invalid body for HTTP request
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use log_facade::config::{load_config, LoggerConfig};
use log_facade::observability::logging::init_diagnostics;
use log_facade::{
    ErrorCode, LogEntry, LogErrorEntry, LogFacade, LogLevel, Logger, Metadata,
    TaskLocalCorrelation,
};

#[derive(Parser)]
#[command(name = "log-facade")]
#[command(about = "Emit a structured log line", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum level (overrides config and LOG_FACADE_LEVEL).
    #[arg(short, long)]
    level: Option<LogLevel>,

    /// Correlation id attached to the line.
    #[arg(long)]
    correlation_id: Option<String>,

    #[command(subcommand)]
    kind: Kind,
}

#[derive(Args)]
struct EntryArgs {
    #[arg(long)]
    context: Option<String>,

    #[arg(long)]
    message: Option<String>,

    /// JSON payload; anything that is not valid JSON is logged as a string.
    #[arg(long)]
    metadata: Option<String>,
}

#[derive(Args)]
struct ErrorEntryArgs {
    #[arg(long)]
    error_code: ErrorCode,

    #[command(flatten)]
    entry: EntryArgs,
}

#[derive(Subcommand)]
enum Kind {
    /// Handled business error (warn)
    Exception(ErrorEntryArgs),
    /// Handled server error (error)
    ServerError(ErrorEntryArgs),
    /// Operation such as a database access (info)
    Operational(EntryArgs),
    /// Incoming HTTP request (http)
    Request(EntryArgs),
    /// HTTP response from this service (http)
    Response(EntryArgs),
    /// HTTP request to an external service (http)
    ServiceRequest(EntryArgs),
    /// HTTP response from an external service (http)
    ServiceResponse(EntryArgs),
    /// System event (verbose)
    System(EntryArgs),
    /// Debugging information (debug)
    Debug(EntryArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_diagnostics()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(level) = cli.level {
        config.level = level;
    }

    let logger = LogFacade::from_config(&config, TaskLocalCorrelation);
    let kind = cli.kind;

    match cli.correlation_id {
        Some(id) => TaskLocalCorrelation::scope(id, async move { emit(&logger, kind) }).await,
        None => emit(&logger, kind),
    }

    Ok(())
}

fn emit(logger: &impl Logger, kind: Kind) {
    match kind {
        Kind::Exception(args) => logger.exception(error_entry(args)),
        Kind::ServerError(args) => logger.server_error(error_entry(args)),
        Kind::Operational(args) => logger.operational(entry(args)),
        Kind::Request(args) => logger.request(entry(args)),
        Kind::Response(args) => logger.response(entry(args)),
        Kind::ServiceRequest(args) => logger.service_request(entry(args)),
        Kind::ServiceResponse(args) => logger.service_response(entry(args)),
        Kind::System(args) => logger.system(entry(args)),
        Kind::Debug(args) => logger.debug(entry(args)),
    }
}

fn entry(args: EntryArgs) -> LogEntry {
    LogEntry {
        context: args.context,
        message: args.message,
        metadata: args.metadata.as_deref().map(parse_metadata),
    }
}

fn error_entry(args: ErrorEntryArgs) -> LogErrorEntry {
    let EntryArgs {
        context,
        message,
        metadata,
    } = args.entry;
    LogErrorEntry {
        context,
        message,
        metadata: metadata.as_deref().map(parse_metadata),
        error_code: args.error_code,
    }
}

fn parse_metadata(raw: &str) -> Metadata {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Metadata::from)
        .unwrap_or_else(|_| Metadata::from(raw))
}
