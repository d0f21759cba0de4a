//! Axum handlers for the profile service: decode the request, run the
//! matching flow, encode the response. No business logic lives here.

use axum::extract::{Multipart, Query, State};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileAnalysisRow, ProfileRow};
use crate::profile::analysis::{analyze_profile, optimize_section, AnalyzeRequest, ProfileAnalysis};
use crate::profile::import::{
    run_manual_import, run_pdf_import, run_url_import, ImportAnalysis, ImportOutcome,
    ManualImportRequest, UrlImportRequest,
};
use crate::profile::store::{fetch_latest_analysis, fetch_profile, update_profile, ProfileUpdate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// Envelope for every import response: the stored profile with its
/// analysis attached.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub profile: ProfileWithAnalysis,
}

#[derive(Debug, Serialize)]
pub struct ProfileWithAnalysis {
    #[serde(flatten)]
    pub row: ProfileRow,
    pub analysis: ImportAnalysis,
}

impl From<ImportOutcome> for ImportResponse {
    fn from(outcome: ImportOutcome) -> Self {
        ImportResponse {
            success: true,
            profile: ProfileWithAnalysis {
                row: outcome.profile,
                analysis: outcome.analysis,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct GetProfileResponse {
    pub profile: ProfileRow,
    /// Newest stored analysis, if one exists.
    pub analysis: Option<ProfileAnalysisRow>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: ProfileAnalysis,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub success: bool,
    pub optimized: String,
    pub original: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub update: ProfileUpdate,
}

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub success: bool,
    pub profile: ProfileRow,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profile/import/pdf
///
/// Multipart body: `user_id` (UUID text field) and `file` (the PDF).
pub async fn handle_import_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        // Take the name as owned before consuming the field body.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("user_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable user_id field: {e}")))?;
                user_id = Some(
                    text.trim()
                        .parse()
                        .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?,
                );
            }
            Some("file") => {
                file = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("unreadable file field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("user_id field is required".to_string()))?;
    let file = file.ok_or_else(|| AppError::Validation("no file provided".to_string()))?;

    if file.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    let outcome = run_pdf_import(&state.db, state.suggester.as_ref(), user_id, file).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/v1/profile/import/manual
pub async fn handle_import_manual(
    State(state): State<AppState>,
    Json(request): Json<ManualImportRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    let outcome = run_manual_import(&state.db, state.suggester.as_ref(), &request).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/v1/profile/import/url
pub async fn handle_import_url(
    State(state): State<AppState>,
    Json(request): Json<UrlImportRequest>,
) -> Result<Json<ImportResponse>, AppError> {
    let outcome = run_url_import(&state.db, state.suggester.as_ref(), &request).await?;
    Ok(Json(outcome.into()))
}

/// GET /api/v1/profile?user_id=...
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<GetProfileResponse>, AppError> {
    let profile = fetch_profile(&state.db, query.user_id).await?;
    let analysis = fetch_latest_analysis(&state.db, profile.id).await?;
    Ok(Json(GetProfileResponse { profile, analysis }))
}

/// POST /api/v1/profile/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.is_empty() {
        return Err(AppError::Validation("profile data is required".to_string()));
    }

    let analysis = analyze_profile(&request, &state.llm).await?;
    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        timestamp: Utc::now(),
    }))
}

/// POST /api/v1/profile/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content is required".to_string()));
    }

    let optimized = optimize_section(&request.section, &request.content, &state.llm).await?;
    Ok(Json(OptimizeResponse {
        success: true,
        optimized,
        original: request.content,
    }))
}

/// PUT /api/v1/profile
pub async fn handle_save(
    State(state): State<AppState>,
    Json(request): Json<SaveProfileRequest>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    let profile = update_profile(&state.db, request.user_id, &request.update).await?;
    Ok(Json(SaveProfileResponse {
        success: true,
        profile,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::score::SectionPoints;

    fn sample_row() -> ProfileRow {
        ProfileRow {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            headline: "Engineer".to_string(),
            summary: String::new(),
            location: String::new(),
            experience: serde_json::json!([]),
            education: serde_json::json!([]),
            skills: vec!["Rust".to_string()],
            certifications: Vec::new(),
            languages: Vec::new(),
            profile_url: None,
            version: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn import_response_flattens_profile_fields() {
        let response = ImportResponse {
            success: true,
            profile: ProfileWithAnalysis {
                row: sample_row(),
                analysis: ImportAnalysis {
                    overall_score: 15,
                    section_scores: SectionPoints {
                        headline: 15,
                        ..SectionPoints::default()
                    },
                    suggestions: vec!["Add a summary".to_string()],
                },
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        // Row fields sit directly on `profile`, with `analysis` nested
        // beside them, mirroring the dashboard's expectations.
        assert_eq!(value["profile"]["headline"], "Engineer");
        assert_eq!(value["profile"]["analysis"]["overall_score"], 15);
        assert_eq!(value["profile"]["analysis"]["section_scores"]["headline"], 15);
    }

    #[test]
    fn save_request_flattens_update_fields() {
        let body = serde_json::json!({
            "user_id": Uuid::nil(),
            "headline": "Staff Engineer",
            "skills": ["Rust", "Go"]
        });
        let request: SaveProfileRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.update.headline, "Staff Engineer");
        assert_eq!(request.update.skills.len(), 2);
        assert!(request.update.experience.is_empty());
    }
}
