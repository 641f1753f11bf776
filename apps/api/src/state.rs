use std::sync::Arc;

use crate::backend_client::SchedulingBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Recommendation/diff backend. `BackendClient` in production, a fake in tests.
    pub backend: Arc<dyn SchedulingBackend>,
}
