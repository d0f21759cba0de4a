// Prompt templates for the profile service.
// Placeholders use {snake_case} markers filled via str::replace.

/// System prompt for whole-profile analysis.
pub const ANALYZE_SYSTEM: &str = "You are a LinkedIn profile optimization expert. \
    You analyze profiles the way a recruiter reads them: ruthlessly and fast. \
    You MUST respond with valid JSON only.";

/// Whole-profile analysis. Expects `{profile_text}`.
pub const ANALYZE_PROMPT: &str = r#"Analyze this LinkedIn profile and provide optimization advice.

PROFILE:
{profile_text}

Respond with a JSON object of exactly this shape:
{
  "score": <integer 0-100, overall profile strength>,
  "suggestions": [<3-5 specific, actionable improvement suggestions>],
  "recommended_keywords": [<keywords this profile should add for its field>],
  "missing_keywords": [<important keywords conspicuously absent>],
  "strengths": [<2-4 things this profile already does well>],
  "improvements": [<2-4 weakest areas, most impactful first>]
}"#;

/// Import-time suggestions. Expects `{profile_json}`.
pub const IMPORT_SUGGESTIONS_PROMPT: &str = r#"A user just imported this LinkedIn profile:

{profile_json}

Respond with a JSON object of exactly this shape:
{
  "suggestions": [<3-4 improvement suggestions, each 2-3 sentences, most impactful first>]
}"#;

/// System prompt for single-section rewrites. Plain text out, not JSON.
pub const OPTIMIZE_SYSTEM: &str = "You are a LinkedIn profile optimization expert. \
    Respond with the rewritten content only. \
    Do NOT include preamble, options, or commentary. \
    Do NOT invent employers, dates, or credentials.";

/// Headline rewrite. Expects `{content}`.
pub const OPTIMIZE_HEADLINE_PROMPT: &str = "Rewrite this LinkedIn headline to be more \
    compelling and keyword-rich. Keep it under 220 characters and keep every \
    factual claim from the original:\n\n{content}";

/// Summary rewrite. Expects `{content}`.
pub const OPTIMIZE_SUMMARY_PROMPT: &str = "Rewrite this LinkedIn summary to be more \
    engaging and achievement-focused. Open with a hook, keep first person, and \
    keep every factual claim from the original:\n\n{content}";

/// Experience description rewrite. Expects `{content}`.
pub const OPTIMIZE_EXPERIENCE_PROMPT: &str = "Rewrite this experience description using \
    strong action verbs and quantified outcomes where the original supplies \
    numbers. Keep every factual claim from the original:\n\n{content}";
