//! Correlation id lookup.
//!
//! # Data Flow
//! ```text
//! request middleware (outside this crate)
//!     → TaskLocalCorrelation::scope(id, handler)
//!     → facade method
//!     → CorrelationProvider::get_id() (read fresh on every call)
//!     → RenderedRecord.correlation_id
//! ```
//!
//! # Design Decisions
//! - The provider is an injected capability, not a hidden global
//! - Ids are read, never generated or cached, by this crate
//! - Isolation between concurrent operations is the provider's guarantee

pub mod task_local;

pub use task_local::TaskLocalCorrelation;

/// Capability returning the correlation id of the current logical operation.
pub trait CorrelationProvider: Send + Sync {
    fn get_id(&self) -> Option<String>;
}

/// Provider for processes without request scoping.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrelation;

impl CorrelationProvider for NoCorrelation {
    fn get_id(&self) -> Option<String> {
        None
    }
}

impl<F> CorrelationProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn get_id(&self) -> Option<String> {
        self()
    }
}
