//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! engine / serializer / config loader
//!     → logging.rs (diagnostic events via tracing, stderr)
//! facade
//!     → metrics.rs (per-record counters)
//! ```
//!
//! # Design Decisions
//! - Diagnostics never go through the facade, so a broken transport cannot hide its own errors
//! - The library never installs a subscriber or recorder; binaries do

pub mod logging;
pub mod metrics;
