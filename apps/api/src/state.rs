use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every field is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Completion backend. `GeminiClient` in production, a stub in tests.
    pub model: Arc<dyn CompletionModel>,
}
