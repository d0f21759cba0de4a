use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A row in `profiles`: the single canonical profile per user.
///
/// `experience` and `education` are stored as JSONB arrays of
/// [`crate::profile::extract::ExperienceEntry`] /
/// [`crate::profile::extract::EducationEntry`] shaped objects.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub experience: Value,
    pub education: Value,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub profile_url: Option<String>,
    /// Bumped on every re-import or save.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row in `profile_analyses`: one scoring snapshot per import/analysis.
/// Append-only; the newest row is the one dashboards show.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileAnalysisRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub overall_score: i32,
    pub section_scores: Option<Value>,
    pub suggestions: Value,
    pub keywords: Option<Value>,
    pub created_at: DateTime<Utc>,
}
