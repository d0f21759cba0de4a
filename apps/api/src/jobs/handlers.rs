//! Axum handlers for the jobs service.

use axum::extract::State;
use axum::Json;

use crate::jobs::matcher::{analyze_job_match, JobAnalyzeRequest, JobAnalyzeResponse};
use crate::state::AppState;

/// POST /api/v1/jobs/analyze
///
/// Always 200; `success: false` marks a fallback report.
pub async fn handle_job_analyze(
    State(state): State<AppState>,
    Json(request): Json<JobAnalyzeRequest>,
) -> Json<JobAnalyzeResponse> {
    Json(analyze_job_match(&request, &state.llm).await)
}
