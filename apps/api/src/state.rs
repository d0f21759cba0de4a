use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::LlmClient;
use crate::profile::suggest::SuggestionEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable import-suggestion backend. Default: LlmSuggestionEngine.
    pub suggester: Arc<dyn SuggestionEngine>,
}
