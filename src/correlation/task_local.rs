//! Per-operation correlation ids backed by a tokio task-local slot.

use std::future::Future;

use super::CorrelationProvider;

tokio::task_local! {
    static CORRELATION_ID: String;
}

/// Reads the id established by the innermost enclosing [`TaskLocalCorrelation::scope`].
///
/// Request middleware wraps each request in a scope; every log call made
/// while serving that request then carries the same id. Concurrent requests
/// see their own ids because the slot is per task.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskLocalCorrelation;

impl TaskLocalCorrelation {
    /// Run `future` with `id` as the current correlation id.
    pub async fn scope<F>(id: impl Into<String>, future: F) -> F::Output
    where
        F: Future,
    {
        CORRELATION_ID.scope(id.into(), future).await
    }

    /// Run `f` synchronously with `id` as the current correlation id.
    pub fn sync_scope<F, R>(id: impl Into<String>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CORRELATION_ID.sync_scope(id.into(), f)
    }

    /// Current id, if called inside a scope.
    pub fn current() -> Option<String> {
        CORRELATION_ID.try_with(|id| id.clone()).ok()
    }
}

impl CorrelationProvider for TaskLocalCorrelation {
    fn get_id(&self) -> Option<String> {
        Self::current()
    }
}
