// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Common instruction appended to all advice prompts.
pub const ADVICE_INSTRUCTION: &str = "\
    CRITICAL: Base every suggestion on the profile content actually provided. \
    Do NOT invent employers, titles, dates, or credentials the profile does not contain. \
    If a section is empty, suggest filling it rather than fabricating content for it.";
