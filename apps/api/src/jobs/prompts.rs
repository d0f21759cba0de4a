// Prompt templates for the jobs service.

/// System prompt for job match analysis.
pub const JOB_MATCH_SYSTEM: &str = "You are a job matching expert who helps candidates \
    tailor their LinkedIn profile to specific postings. \
    You MUST respond with valid JSON only.";

/// Match analysis. Expects `{job_text}`, `{headline}`, `{summary}`, `{skills}`.
pub const JOB_MATCH_PROMPT: &str = r#"Analyze how well this candidate matches the job posting.

JOB POSTING:
{job_text}

CANDIDATE PROFILE:
Headline: {headline}
Summary: {summary}
Skills: {skills}

Respond with a JSON object of exactly this shape:
{
  "score": <integer 0-100, overall match strength>,
  "missing_keywords": [<keywords the posting wants that the profile lacks>],
  "suggestions": [<3-5 concrete changes that would improve the match>],
  "tailored_content": {
    "headline": <the candidate's headline rewritten for this posting>,
    "summary": <a 2-3 sentence summary rewritten for this posting>,
    "skills": [<the candidate's skills reordered and extended for this posting>]
  }
}

Do not invent experience the candidate does not have; tailoring reframes, it never fabricates."#;

/// Demo posting analyzed when the request carries no job description.
pub const DEMO_JOB_DESCRIPTION: &str = "\
Senior Software Engineer

We are looking for a Senior Software Engineer to join our growing team. You will \
design and build scalable backend services, own features end to end, and mentor \
junior engineers.

Requirements:
- 5+ years of professional software development experience
- Strong proficiency in JavaScript/TypeScript and Node.js
- Experience with React and modern frontend tooling
- Hands-on experience with AWS, Docker, and Kubernetes
- Familiarity with GraphQL and REST API design
- Experience with CI/CD pipelines and agile development";
