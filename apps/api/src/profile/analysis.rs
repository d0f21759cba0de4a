//! Whole-profile analysis and single-section rewrites.
//!
//! The analyze flow combines three sources: the model's free-text advice,
//! the local keyword frequency pass, and the deterministic rubric as the
//! score of record when the model omits one.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::ADVICE_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::profile::extract::{EducationEntry, ExperienceEntry, ExtractedProfile};
use crate::profile::keywords::extract_keywords;
use crate::profile::prompts::{
    ANALYZE_PROMPT, ANALYZE_SYSTEM, OPTIMIZE_EXPERIENCE_PROMPT, OPTIMIZE_HEADLINE_PROMPT,
    OPTIMIZE_SUMMARY_PROMPT, OPTIMIZE_SYSTEM,
};
use crate::profile::score::score_profile;

/// Sampling temperature for analysis and rewrites.
const ANALYZE_TEMPERATURE: f32 = 0.7;

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// Body of `POST /api/v1/profile/analyze`. Sections are independently
/// optional; at least one of headline, summary, or experience is required.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceInput>>,
    #[serde(default)]
    pub education: Option<Vec<EducationInput>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub target_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EducationInput {
    pub degree: String,
    #[serde(default)]
    pub field: String,
    pub school: String,
    #[serde(default)]
    pub graduation_year: Option<String>,
}

impl AnalyzeRequest {
    /// True when no analyzable content was submitted.
    pub fn is_empty(&self) -> bool {
        self.headline.is_none() && self.summary.is_none() && self.experience.is_none()
    }

    /// Maps the request onto the extractor's record shape so the rubric
    /// can score it.
    fn to_extracted(&self) -> ExtractedProfile {
        ExtractedProfile {
            headline: self.headline.clone().unwrap_or_default(),
            summary: self.summary.clone().unwrap_or_default(),
            location: String::new(),
            experience: self
                .experience
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|e| ExperienceEntry {
                    title: e.title.clone(),
                    company: e.company.clone(),
                    duration: format!(
                        "{} - {}",
                        e.start_date,
                        e.end_date.as_deref().unwrap_or("Present")
                    ),
                    description: e.description.clone(),
                })
                .collect(),
            education: self
                .education
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|e| EducationEntry {
                    school: e.school.clone(),
                    degree: e.degree.clone(),
                    field: e.field.clone(),
                    duration: e.graduation_year.clone().unwrap_or_default(),
                })
                .collect(),
            skills: self.skills.clone().unwrap_or_default(),
            certifications: Vec::new(),
            languages: Vec::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProfileAnalysis {
    pub score: u8,
    pub suggestions: Vec<String>,
    pub keywords: KeywordAnalysis,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct KeywordAnalysis {
    /// Frequency-ranked keywords already present, computed locally.
    pub current: Vec<String>,
    pub recommended: Vec<String>,
    pub missing: Vec<String>,
}

/// Model half of an analysis. Every field optional: a sparse reply
/// degrades field by field instead of failing the request.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    score: Option<f64>,
    suggestions: Option<Vec<String>>,
    recommended_keywords: Option<Vec<String>>,
    missing_keywords: Option<Vec<String>>,
    strengths: Option<Vec<String>>,
    improvements: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Flows
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full analysis flow for an ad-hoc profile payload.
pub async fn analyze_profile(
    request: &AnalyzeRequest,
    llm: &LlmClient,
) -> Result<ProfileAnalysis, AppError> {
    let profile_text = render_profile_text(request);

    let prompt = format!(
        "{}\n\n{ADVICE_INSTRUCTION}",
        ANALYZE_PROMPT.replace("{profile_text}", &profile_text)
    );

    let raw: RawAnalysis = llm
        .call_json(&prompt, ANALYZE_SYSTEM, ANALYZE_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("profile analysis failed: {e}")))?;

    // The rubric is the score of record when the model omits one.
    let rubric_total = score_profile(&request.to_extracted()).total;

    Ok(ProfileAnalysis {
        score: raw.score.map(clamp_score).unwrap_or(rubric_total),
        suggestions: raw.suggestions.unwrap_or_default(),
        keywords: KeywordAnalysis {
            current: extract_keywords(&profile_text),
            recommended: raw.recommended_keywords.unwrap_or_default(),
            missing: raw.missing_keywords.unwrap_or_default(),
        },
        strengths: raw.strengths.unwrap_or_default(),
        improvements: raw.improvements.unwrap_or_default(),
    })
}

/// Rewrites a single section. Plain-text model call; unknown section names
/// get the generic prompt rather than an error.
pub async fn optimize_section(
    section: &str,
    content: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = optimize_prompt(section, content);

    let response = llm
        .call(&prompt, OPTIMIZE_SYSTEM, ANALYZE_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("section optimization failed: {e}")))?;

    match response.text() {
        Some(text) => Ok(text.trim().to_string()),
        None => Err(AppError::Llm("empty optimization response".to_string())),
    }
}

fn optimize_prompt(section: &str, content: &str) -> String {
    match section {
        "headline" => OPTIMIZE_HEADLINE_PROMPT.replace("{content}", content),
        "summary" => OPTIMIZE_SUMMARY_PROMPT.replace("{content}", content),
        "experience" => OPTIMIZE_EXPERIENCE_PROMPT.replace("{content}", content),
        _ => format!("Optimize this LinkedIn profile content:\n\n{content}"),
    }
}

/// Renders the request into the flat text block the prompt and the keyword
/// pass both consume.
fn render_profile_text(request: &AnalyzeRequest) -> String {
    let mut out = String::new();

    if let Some(headline) = request.headline.as_deref() {
        out.push_str(&format!("Headline: {headline}\n"));
    }
    if let Some(summary) = request.summary.as_deref() {
        out.push_str(&format!("Summary: {summary}\n"));
    }
    if let Some(experience) = request.experience.as_deref() {
        out.push_str("Experience:\n");
        for entry in experience {
            out.push_str(&format!(
                "- {} at {} ({} - {}): {}\n",
                entry.title,
                entry.company,
                entry.start_date,
                entry.end_date.as_deref().unwrap_or("Present"),
                entry.description,
            ));
        }
    }
    if let Some(education) = request.education.as_deref() {
        out.push_str("Education:\n");
        for entry in education {
            out.push_str(&format!(
                "- {} in {} from {}\n",
                entry.degree, entry.field, entry.school
            ));
        }
    }
    if let Some(skills) = request.skills.as_deref() {
        out.push_str(&format!("Skills: {}\n", skills.join(", ")));
    }
    if let Some(target_role) = request.target_role.as_deref() {
        out.push_str(&format!("Target Role: {target_role}\n"));
    }

    out
}

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AnalyzeRequest {
        AnalyzeRequest {
            headline: Some("Senior Rust Engineer".to_string()),
            summary: Some("Distributed systems and storage engines.".to_string()),
            experience: Some(vec![ExperienceInput {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                description: "Built the billing pipeline".to_string(),
                start_date: "2020".to_string(),
                end_date: None,
            }]),
            education: None,
            skills: Some(vec!["Rust".to_string(), "PostgreSQL".to_string()]),
            target_role: Some("Staff Engineer".to_string()),
        }
    }

    #[test]
    fn empty_request_is_detected() {
        let empty = AnalyzeRequest {
            headline: None,
            summary: None,
            experience: None,
            education: None,
            skills: Some(vec!["Rust".to_string()]),
            target_role: None,
        };
        assert!(empty.is_empty());
        assert!(!request().is_empty());
    }

    #[test]
    fn rendered_text_contains_every_section() {
        let text = render_profile_text(&request());
        assert!(text.contains("Headline: Senior Rust Engineer"));
        assert!(text.contains("Engineer at Acme (2020 - Present)"));
        assert!(text.contains("Skills: Rust, PostgreSQL"));
        assert!(text.contains("Target Role: Staff Engineer"));
        assert!(!text.contains("Education:"));
    }

    #[test]
    fn rubric_fallback_maps_request_sections() {
        let extracted = request().to_extracted();
        assert_eq!(extracted.headline, "Senior Rust Engineer");
        assert_eq!(extracted.experience.len(), 1);
        assert_eq!(extracted.experience[0].duration, "2020 - Present");
        assert!(extracted.education.is_empty());
        // headline 15 + experience 25; two skills are under the baseline.
        assert_eq!(score_profile(&extracted).total, 40);
    }

    #[test]
    fn optimize_prompt_picks_section_template() {
        assert!(optimize_prompt("headline", "Dev").contains("headline"));
        assert!(optimize_prompt("summary", "Dev").contains("summary"));
        assert!(optimize_prompt("experience", "Dev").contains("experience"));
        assert!(optimize_prompt("certifications", "Dev").starts_with("Optimize this"));
    }

    #[test]
    fn model_scores_are_clamped_to_rubric_range() {
        assert_eq!(clamp_score(-3.0), 0);
        assert_eq!(clamp_score(54.4), 54);
        assert_eq!(clamp_score(54.6), 55);
        assert_eq!(clamp_score(250.0), 100);
    }

    #[test]
    fn sparse_model_reply_deserializes() {
        let raw: RawAnalysis = serde_json::from_str(r#"{"score": 72}"#).unwrap();
        assert_eq!(raw.score, Some(72.0));
        assert!(raw.suggestions.is_none());

        let raw: RawAnalysis = serde_json::from_str("{}").unwrap();
        assert!(raw.score.is_none());
    }
}
