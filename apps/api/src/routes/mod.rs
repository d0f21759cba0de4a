pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs;
use crate::profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/profile",
            get(profile::handlers::handle_get_profile).put(profile::handlers::handle_save),
        )
        .route(
            "/api/v1/profile/import/pdf",
            post(profile::handlers::handle_import_pdf),
        )
        .route(
            "/api/v1/profile/import/manual",
            post(profile::handlers::handle_import_manual),
        )
        .route(
            "/api/v1/profile/import/url",
            post(profile::handlers::handle_import_url),
        )
        .route(
            "/api/v1/profile/analyze",
            post(profile::handlers::handle_analyze),
        )
        .route(
            "/api/v1/profile/optimize",
            post(profile::handlers::handle_optimize),
        )
        // Jobs API
        .route(
            "/api/v1/jobs/analyze",
            post(jobs::handlers::handle_job_analyze),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::errors::AppError;
    use crate::llm_client::LlmClient;
    use crate::profile::extract::ExtractedProfile;
    use crate::profile::suggest::SuggestionEngine;

    struct StaticSuggester;

    #[async_trait]
    impl SuggestionEngine for StaticSuggester {
        async fn suggestions(
            &self,
            _profile: &ExtractedProfile,
        ) -> Result<Vec<String>, AppError> {
            Ok(vec!["Add a summary".to_string()])
        }
    }

    // Route registration panics on malformed paths or duplicate methods;
    // building the router with lazy state catches that without a live DB.
    #[tokio::test]
    async fn router_builds_with_lazy_state() {
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/profileboost_test")
            .unwrap();

        let state = AppState {
            db,
            llm: LlmClient::new("test-key".to_string()),
            suggester: Arc::new(StaticSuggester),
        };

        let _router = build_router(state);
    }
}
