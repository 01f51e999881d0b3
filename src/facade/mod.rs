//! Public logging surface.
//!
//! # Data Flow
//! ```text
//! caller
//!     → Logger method (fixes level + category)
//!     → service.rs (default message, correlation id, record)
//!     → LogEngine::log
//! ```
//!
//! # Kinds
//! | Method             | Level   | Category         | Message when absent          |
//! |--------------------|---------|------------------|------------------------------|
//! | `exception`        | warn    | EXCEPTION        | error code description       |
//! | `server_error`     | error   | EXCEPTION        | error code description       |
//! | `operational`      | info    | OPERATIONAL      | empty                        |
//! | `request`          | http    | REQUEST          | empty                        |
//! | `response`         | http    | RESPONSE         | empty                        |
//! | `service_request`  | http    | SERVICE_REQUEST  | empty                        |
//! | `service_response` | http    | SERVICE_RESPONSE | empty                        |
//! | `system`           | verbose | SYSTEM           | empty                        |
//! | `debug`            | debug   | DEBUG            | empty                        |

pub mod service;

use crate::record::{LogEntry, LogErrorEntry};

pub use service::LogFacade;

/// One method per semantic log kind.
pub trait Logger: Send + Sync {
    /// Logs a handled business error.
    fn exception(&self, entry: LogErrorEntry);

    /// Logs a handled server-side error.
    fn server_error(&self, entry: LogErrorEntry);

    /// Logs an operation, like a database access.
    fn operational(&self, entry: LogEntry);

    /// Logs an incoming HTTP request.
    fn request(&self, entry: LogEntry);

    /// Logs an HTTP response from this service.
    fn response(&self, entry: LogEntry);

    /// Logs an HTTP request to an external service.
    fn service_request(&self, entry: LogEntry);

    /// Logs an HTTP response from an external service.
    fn service_response(&self, entry: LogEntry);

    /// Logs system events, like the listen port or configuration details.
    fn system(&self, entry: LogEntry);

    /// Logs information for debugging purposes.
    fn debug(&self, entry: LogEntry);
}
