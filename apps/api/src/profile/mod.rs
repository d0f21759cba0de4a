// Profile Engine: import, extraction, scoring, analysis, persistence.
//
// Flow: an import path (PDF, manual, URL) produces an ExtractedProfile,
// which is scored by the rubric, annotated by the suggestion backend, and
// persisted. Analysis and optimization run on demand against submitted
// content. All model calls go through llm_client.

pub mod analysis;
pub mod extract;
pub mod handlers;
pub mod import;
pub mod keywords;
pub mod prompts;
pub mod score;
pub mod scrape;
pub mod store;
pub mod suggest;
