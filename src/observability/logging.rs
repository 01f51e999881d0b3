//! Crate diagnostics.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for binaries
//! - Keep diagnostics on stderr so stdout carries only rendered lines
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the default filter
//! - Lines re-emitted by `TracingTransport` pass the default filter at every level

use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "log_facade=warn,log_facade::line=trace";

/// Install the global diagnostics subscriber.
pub fn init_diagnostics() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
