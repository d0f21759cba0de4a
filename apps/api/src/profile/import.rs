//! Import orchestration.
//!
//! All three import paths (PDF upload, pasted form fields, profile URL)
//! funnel into one pipeline: structured record, rubric score, model
//! suggestions, persist, respond. A model outage degrades the suggestions;
//! it never fails an import.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::profile::extract::{extract, EducationEntry, ExperienceEntry, ExtractedProfile};
use crate::profile::score::{score_profile, SectionPoints};
use crate::profile::scrape::scrape_profile;
use crate::profile::store::{insert_analysis, upsert_profile};
use crate::profile::suggest::{fallback_suggestions, SuggestionEngine};

/// Title used when a pasted experience line has nothing before the dash.
const DEFAULT_TITLE: &str = "Position";
/// Placeholder company for pasted experience lines; the form does not
/// collect one separately.
const DEFAULT_COMPANY: &str = "Company";
/// School used when a pasted education line has nothing before the dash.
const DEFAULT_SCHOOL: &str = "School";
/// Placeholder degree for pasted education lines.
const DEFAULT_DEGREE: &str = "Degree";

/// Result of any import: the persisted row plus the analysis stored with it.
#[derive(Debug, Serialize)]
pub struct ImportOutcome {
    pub profile: ProfileRow,
    pub analysis: ImportAnalysis,
}

#[derive(Debug, Serialize)]
pub struct ImportAnalysis {
    pub overall_score: u8,
    pub section_scores: SectionPoints,
    pub suggestions: Vec<String>,
}

/// Body of `POST /api/v1/profile/import/manual`. Free-text fields straight
/// from the dashboard form; multi-entry sections are one entry per line.
#[derive(Debug, Deserialize)]
pub struct ManualImportRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub certifications: String,
}

/// Body of `POST /api/v1/profile/import/url`.
#[derive(Debug, Deserialize)]
pub struct UrlImportRequest {
    pub user_id: Uuid,
    pub url: String,
}

/// PDF import: pull text out of the uploaded bytes, then bucket it.
pub async fn run_pdf_import(
    pool: &PgPool,
    suggester: &dyn SuggestionEngine,
    user_id: Uuid,
    data: Bytes,
) -> Result<ImportOutcome, AppError> {
    let text = pdf_extract::extract_text_from_mem(&data)
        .map_err(|e| AppError::UnprocessableEntity(format!("could not read PDF: {e}")))?;

    info!("Extracted {} bytes of text from uploaded PDF", text.len());

    let extracted = extract(&text);
    finish_import(pool, suggester, user_id, extracted, None).await
}

/// Manual import: normalize pasted form fields into the same record shape.
pub async fn run_manual_import(
    pool: &PgPool,
    suggester: &dyn SuggestionEngine,
    request: &ManualImportRequest,
) -> Result<ImportOutcome, AppError> {
    let extracted = normalize_manual(request);
    finish_import(pool, suggester, request.user_id, extracted, None).await
}

/// URL import: resolve via the scrape stub and record the source URL.
pub async fn run_url_import(
    pool: &PgPool,
    suggester: &dyn SuggestionEngine,
    request: &UrlImportRequest,
) -> Result<ImportOutcome, AppError> {
    if !request.url.contains("linkedin.com") {
        return Err(AppError::Validation(
            "please provide a valid LinkedIn profile URL".to_string(),
        ));
    }

    let extracted = scrape_profile(&request.url);
    finish_import(pool, suggester, request.user_id, extracted, Some(&request.url)).await
}

/// Shared tail of every import: score, advise, persist, respond.
async fn finish_import(
    pool: &PgPool,
    suggester: &dyn SuggestionEngine,
    user_id: Uuid,
    extracted: ExtractedProfile,
    profile_url: Option<&str>,
) -> Result<ImportOutcome, AppError> {
    let score = score_profile(&extracted);

    let suggestions = match suggester.suggestions(&extracted).await {
        Ok(s) => s,
        Err(e) => {
            warn!("suggestion backend failed, serving fallback: {e}");
            fallback_suggestions()
        }
    };

    let profile = upsert_profile(pool, user_id, &extracted, profile_url).await?;
    insert_analysis(pool, profile.id, &score, &suggestions).await?;

    Ok(ImportOutcome {
        profile,
        analysis: ImportAnalysis {
            overall_score: score.total,
            section_scores: score.sections,
            suggestions,
        },
    })
}

/// Converts free-text form fields into the extractor's record shape.
///
/// Experience and education take one entry per line. The text before the
/// first dash becomes the title (or school); the rest of the line is not
/// parsed further. The full line is preserved as the description.
fn normalize_manual(request: &ManualImportRequest) -> ExtractedProfile {
    let experience = non_empty_lines(&request.experience)
        .map(|line| ExperienceEntry {
            title: before_dash(line).unwrap_or(DEFAULT_TITLE).to_string(),
            company: DEFAULT_COMPANY.to_string(),
            duration: String::new(),
            description: line.to_string(),
        })
        .collect();

    let education = non_empty_lines(&request.education)
        .map(|line| EducationEntry {
            school: before_dash(line).unwrap_or(DEFAULT_SCHOOL).to_string(),
            degree: DEFAULT_DEGREE.to_string(),
            field: String::new(),
            duration: String::new(),
        })
        .collect();

    ExtractedProfile {
        headline: request.headline.trim().to_string(),
        summary: request.summary.trim().to_string(),
        location: String::new(),
        experience,
        education,
        skills: split_list(&request.skills),
        certifications: non_empty_lines(&request.certifications)
            .map(str::to_string)
            .collect(),
        languages: Vec::new(),
    }
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Comma-separated list into trimmed, non-empty items.
fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text before the first dash, if non-empty after trimming.
fn before_dash(line: &str) -> Option<&str> {
    line.split('-').next().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_request() -> ManualImportRequest {
        ManualImportRequest {
            user_id: Uuid::nil(),
            headline: "  Senior Engineer  ".to_string(),
            summary: "Ten years of backend work.".to_string(),
            experience: "Senior Engineer - Acme Corp\n\nTech Lead - Globex".to_string(),
            education: "State University - BS Computer Science".to_string(),
            skills: "Rust, Go, , PostgreSQL".to_string(),
            certifications: "CKA\nAWS SAA".to_string(),
        }
    }

    #[test]
    fn manual_fields_are_trimmed_and_split() {
        let profile = normalize_manual(&manual_request());

        assert_eq!(profile.headline, "Senior Engineer");
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "Senior Engineer");
        assert_eq!(profile.experience[0].company, DEFAULT_COMPANY);
        assert_eq!(profile.experience[0].description, "Senior Engineer - Acme Corp");
        assert_eq!(profile.experience[1].title, "Tech Lead");

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].school, "State University");
        assert_eq!(profile.education[0].degree, DEFAULT_DEGREE);

        assert_eq!(profile.skills, vec!["Rust", "Go", "PostgreSQL"]);
        assert_eq!(profile.certifications, vec!["CKA", "AWS SAA"]);
    }

    #[test]
    fn dashless_lines_keep_the_whole_line_as_title() {
        let request = ManualImportRequest {
            user_id: Uuid::nil(),
            headline: String::new(),
            summary: String::new(),
            experience: "Freelance consulting".to_string(),
            education: "Self-taught".to_string(),
            skills: String::new(),
            certifications: String::new(),
        };
        let profile = normalize_manual(&request);

        assert_eq!(profile.experience[0].title, "Freelance consulting");
        assert_eq!(profile.experience[0].company, DEFAULT_COMPANY);
        // The split is on any dash, not just " - " separators.
        assert_eq!(profile.education[0].school, "Self");
    }

    #[test]
    fn leading_dash_lines_use_default_title() {
        let request = ManualImportRequest {
            user_id: Uuid::nil(),
            headline: String::new(),
            summary: String::new(),
            experience: "- Acme Corp".to_string(),
            education: String::new(),
            skills: String::new(),
            certifications: String::new(),
        };
        let profile = normalize_manual(&request);
        assert_eq!(profile.experience[0].title, DEFAULT_TITLE);
        assert_eq!(profile.experience[0].description, "- Acme Corp");
    }

    #[test]
    fn empty_form_yields_empty_record() {
        let request = ManualImportRequest {
            user_id: Uuid::nil(),
            headline: String::new(),
            summary: String::new(),
            experience: String::new(),
            education: String::new(),
            skills: String::new(),
            certifications: String::new(),
        };
        let profile = normalize_manual(&request);
        assert_eq!(profile, ExtractedProfile::default());
    }
}
