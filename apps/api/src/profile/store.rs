//! Profile persistence. Plain bind-parameter queries against PostgreSQL.

use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileAnalysisRow, ProfileRow};
use crate::profile::extract::{EducationEntry, ExperienceEntry, ExtractedProfile};
use crate::profile::score::ProfileScore;

/// Inserts or refreshes the single profile row for a user. Re-imports bump
/// `version` and keep the existing `profile_url` unless a new one arrives.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    extracted: &ExtractedProfile,
    profile_url: Option<&str>,
) -> Result<ProfileRow, AppError> {
    let experience = serde_json::to_value(&extracted.experience)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("experience serialization: {e}")))?;
    let education = serde_json::to_value(&extracted.education)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("education serialization: {e}")))?;

    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles
            (id, user_id, headline, summary, location, experience, education,
             skills, certifications, languages, profile_url, version)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 1)
        ON CONFLICT (user_id) DO UPDATE SET
            headline = EXCLUDED.headline,
            summary = EXCLUDED.summary,
            location = EXCLUDED.location,
            experience = EXCLUDED.experience,
            education = EXCLUDED.education,
            skills = EXCLUDED.skills,
            certifications = EXCLUDED.certifications,
            languages = EXCLUDED.languages,
            profile_url = COALESCE(EXCLUDED.profile_url, profiles.profile_url),
            version = profiles.version + 1,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&extracted.headline)
    .bind(&extracted.summary)
    .bind(&extracted.location)
    .bind(&experience)
    .bind(&education)
    .bind(&extracted.skills)
    .bind(&extracted.certifications)
    .bind(&extracted.languages)
    .bind(profile_url)
    .fetch_one(pool)
    .await?;

    info!(
        "Upserted profile {} for user {} (version {})",
        row.id, row.user_id, row.version
    );
    Ok(row)
}

/// Fields a user can edit and save from the dashboard.
#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Overwrites the editable fields of an existing profile.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> Result<ProfileRow, AppError> {
    let experience = serde_json::to_value(&update.experience)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("experience serialization: {e}")))?;
    let education = serde_json::to_value(&update.education)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("education serialization: {e}")))?;

    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        UPDATE profiles SET
            headline = $2,
            summary = $3,
            experience = $4,
            education = $5,
            skills = $6,
            certifications = $7,
            version = version + 1,
            updated_at = NOW()
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&update.headline)
    .bind(&update.summary)
    .bind(&experience)
    .bind(&education)
    .bind(&update.skills)
    .bind(&update.certifications)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("no profile for user {user_id}")))?;

    Ok(row)
}

/// Loads the profile for a user, or 404s.
pub async fn fetch_profile(pool: &PgPool, user_id: Uuid) -> Result<ProfileRow, AppError> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no profile for user {user_id}")))
}

/// Appends one scoring snapshot for a profile.
pub async fn insert_analysis(
    pool: &PgPool,
    profile_id: Uuid,
    score: &ProfileScore,
    suggestions: &[String],
) -> Result<(), AppError> {
    let section_scores = serde_json::to_value(score.sections)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("section score serialization: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO profile_analyses (id, profile_id, overall_score, section_scores, suggestions)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(profile_id)
    .bind(i32::from(score.total))
    .bind(&section_scores)
    .bind(serde_json::json!({ "items": suggestions }))
    .execute(pool)
    .await?;

    Ok(())
}

/// Newest scoring snapshot for a profile, if any exist yet.
pub async fn fetch_latest_analysis(
    pool: &PgPool,
    profile_id: Uuid,
) -> Result<Option<ProfileAnalysisRow>, AppError> {
    let row = sqlx::query_as::<_, ProfileAnalysisRow>(
        r#"
        SELECT * FROM profile_analyses
        WHERE profile_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(profile_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
