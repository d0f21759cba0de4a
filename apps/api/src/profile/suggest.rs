//! Import-time suggestion generation.
//!
//! The backend sits behind a trait so handlers and tests never depend on a
//! live model. Suggestion failures are non-fatal by contract: import flows
//! catch the error and serve [`fallback_suggestions`] instead.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::profile::extract::ExtractedProfile;
use crate::profile::prompts::IMPORT_SUGGESTIONS_PROMPT;

/// Sampling temperature for advice generation.
const SUGGEST_TEMPERATURE: f32 = 0.7;

/// Produces free-text improvement suggestions for a freshly imported
/// profile. Carried in `AppState` as `Arc<dyn SuggestionEngine>`.
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    async fn suggestions(&self, profile: &ExtractedProfile) -> Result<Vec<String>, AppError>;
}

/// Default backend: one JSON-mode model call per import.
pub struct LlmSuggestionEngine {
    llm: LlmClient,
}

impl LlmSuggestionEngine {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    suggestions: Vec<String>,
}

#[async_trait]
impl SuggestionEngine for LlmSuggestionEngine {
    async fn suggestions(&self, profile: &ExtractedProfile) -> Result<Vec<String>, AppError> {
        let rendered = serde_json::to_string_pretty(profile)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to render profile: {e}")))?;

        let prompt = IMPORT_SUGGESTIONS_PROMPT.replace("{profile_json}", &rendered);

        let payload: SuggestionPayload = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM, SUGGEST_TEMPERATURE)
            .await
            .map_err(|e| AppError::Llm(format!("suggestion generation failed: {e}")))?;

        Ok(payload.suggestions)
    }
}

/// Canned suggestions served when the model call fails. Generic enough to
/// apply to any profile.
pub fn fallback_suggestions() -> Vec<String> {
    [
        "Add more keywords relevant to your industry",
        "Include quantifiable achievements in your experience descriptions",
        "Use action verbs and concrete metrics",
        "Add trending skills in your field",
    ]
    .map(str::to_string)
    .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_nonempty_and_stable() {
        let first = fallback_suggestions();
        assert_eq!(first.len(), 4);
        assert_eq!(first, fallback_suggestions());
    }

    #[test]
    fn suggestion_payload_deserializes_model_shape() {
        let payload: SuggestionPayload =
            serde_json::from_str(r#"{"suggestions": ["Add metrics", "Shorten headline"]}"#)
                .unwrap();
        assert_eq!(payload.suggestions.len(), 2);
    }
}
