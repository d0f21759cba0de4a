//! Section-bucketing text extractor.
//!
//! Turns linearized profile text (a LinkedIn PDF export, pasted sections,
//! any roughly resume-shaped document) into a structured [`ExtractedProfile`]
//! in a single pass over trimmed, non-empty lines. Entirely heuristic and
//! total: there is no grammar and no failure mode. Unrecognizable input
//! degrades to emptier output, never to an error.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Keyword tables
// ────────────────────────────────────────────────────────────────────────────

/// Role keywords that mark a line as a candidate headline.
/// Matched case-sensitively as substrings.
const HEADLINE_KEYWORDS: &[&str] = &[
    "Senior",
    "Lead",
    "Manager",
    "Developer",
    "Engineer",
    "Designer",
    "Analyst",
    "Consultant",
    "Director",
    "Specialist",
];

/// Location keywords: major cities plus region and country markers.
const LOCATION_KEYWORDS: &[&str] = &[
    "San Francisco",
    "New York",
    "London",
    "Seattle",
    "Austin",
    "Boston",
    "Chicago",
    "Toronto",
    "Berlin",
    "Bangalore",
    "Singapore",
    "Area",
    "United States",
    "USA",
    "UK",
    "Canada",
    "Remote",
];

/// Degree keywords checked before falling back to treating a line as a
/// school name. Case-sensitive on purpose: "BS" should match, "bs" inside
/// a word should not.
const DEGREE_KEYWORDS: &[&str] = &["Bachelor", "Master", "PhD", "BS", "MS"];

/// Section header synonyms. A line whose lowercased form exactly equals the
/// left column switches the extractor into the section on the right. Exact
/// equality only: "Experience:" or "My Experience" do not match.
const SECTION_HEADERS: &[(&str, Section)] = &[
    ("about", Section::Summary),
    ("summary", Section::Summary),
    ("profile", Section::Summary),
    ("experience", Section::Experience),
    ("work experience", Section::Experience),
    ("education", Section::Education),
    ("skills", Section::Skills),
    ("technical skills", Section::Skills),
    ("certifications", Section::Certifications),
    ("licenses & certifications", Section::Certifications),
    ("languages", Section::Languages),
];

/// Number of leading lines scanned by the headline pre-pass.
const HEADLINE_WINDOW: usize = 10;
/// Company lines must be shorter than this.
const MAX_COMPANY_LEN: usize = 100;
/// Bare (non-comma, non-bullet) skill lines must be shorter than this.
const MAX_SKILL_LEN: usize = 50;
/// Bare language lines must be shorter than this.
const MAX_LANGUAGE_LEN: usize = 30;

// ────────────────────────────────────────────────────────────────────────────
// Line patterns
// ────────────────────────────────────────────────────────────────────────────

/// A duration line that opens a new experience entry: "2019 - 2022",
/// "2020 – Present", "2021-current".
static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d{4}\s*[-–]\s*(?:\d{4}|present|current)").unwrap());

/// A closed YYYY-YYYY range. Only this shape populates an education
/// duration; "Graduated 2016" opens an entry but leaves the duration empty.
static FULL_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}\s*[-–]\s*\d{4}").unwrap());

/// Any run of four digits. Used both as the education entry trigger and as
/// the guard that keeps stray date lines out of experience titles.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Output model
// ────────────────────────────────────────────────────────────────────────────

/// One job block detected inside the experience section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// One block detected inside the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    /// Kept for schema parity with manually entered profiles. The line
    /// heuristic never fills it: a line like "BS Computer Science" carries
    /// degree and field together and lands in `degree` whole.
    pub field: String,
    pub duration: String,
}

/// Structured result of [`extract`]. Transient: import flows merge it into
/// the persisted profile record and drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
}

/// Bucketing mode of the main pass. Entered on an exact header match and
/// left only on the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Lines before any recognized header. Only the headline and location
    /// pre-passes look at these.
    Preamble,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Extracts a structured profile from linearized document text.
///
/// Total function: it never fails and holds no state between calls, so the
/// same input always yields the same output. One linear pass over the lines
/// plus two bounded pre-passes (headline, location).
pub fn extract(text: &str) -> ExtractedProfile {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let headline = find_headline(&lines);
    let location = find_location(&lines);

    let mut summary_parts: Vec<&str> = Vec::new();
    let mut experience: Vec<ExperienceEntry> = Vec::new();
    let mut education: Vec<EducationEntry> = Vec::new();
    let mut skills: Vec<String> = Vec::new();
    let mut certifications: Vec<String> = Vec::new();
    let mut languages: Vec<String> = Vec::new();

    let mut section = Section::Preamble;
    let mut open_experience: Option<ExperienceEntry> = None;
    let mut open_education: Option<EducationEntry> = None;

    for line in &lines {
        if let Some(next) = match_section_header(line) {
            // Header lines are consumed; they never contribute content.
            section = next;
            continue;
        }

        match section {
            Section::Preamble => {}
            Section::Summary => {
                // Net for header variants the exact-match table missed,
                // e.g. "Experience:" with a trailing colon.
                if !starts_with_section_name(line) {
                    summary_parts.push(line);
                }
            }
            Section::Experience => {
                if YEAR_RANGE_RE.is_match(line) {
                    if let Some(entry) = open_experience.take() {
                        experience.push(entry);
                    }
                    open_experience = Some(ExperienceEntry {
                        duration: (*line).to_string(),
                        ..ExperienceEntry::default()
                    });
                } else if let Some(entry) = open_experience.as_mut() {
                    if entry.title.is_empty() && !YEAR_RE.is_match(line) {
                        // A year-bearing line is assumed to be a stray date,
                        // never a title. When the source lists the company
                        // before the title this mis-assigns; accepted.
                        entry.title = (*line).to_string();
                    } else if entry.company.is_empty() && line.len() < MAX_COMPANY_LEN {
                        entry.company = (*line).to_string();
                    } else if is_bullet(line) {
                        if !entry.description.is_empty() {
                            entry.description.push(' ');
                        }
                        entry.description.push_str(line);
                    }
                    // Anything else between entries is dropped.
                }
            }
            Section::Education => {
                if YEAR_RE.is_match(line) {
                    if let Some(entry) = open_education.take() {
                        education.push(entry);
                    }
                    open_education = Some(EducationEntry {
                        duration: if FULL_RANGE_RE.is_match(line) {
                            (*line).to_string()
                        } else {
                            String::new()
                        },
                        ..EducationEntry::default()
                    });
                } else if let Some(entry) = open_education.as_mut() {
                    if entry.degree.is_empty() && contains_any(line, DEGREE_KEYWORDS) {
                        entry.degree = (*line).to_string();
                    } else if entry.school.is_empty() {
                        entry.school = (*line).to_string();
                    }
                }
            }
            Section::Skills => {
                if line.contains(',') {
                    skills.extend(line.split(',').map(|s| s.trim().to_string()));
                } else if is_bullet(line) {
                    skills.push(strip_bullet(line).to_string());
                } else if line.len() < MAX_SKILL_LEN {
                    skills.push((*line).to_string());
                }
            }
            Section::Certifications => {
                // Issuer/date lines ("Issued Jan 2023") belong to the
                // certification above them and are skipped.
                if !line.to_lowercase().contains("issued") {
                    certifications.push(strip_bullet(line).to_string());
                }
            }
            Section::Languages => {
                if line.contains(',') {
                    languages.extend(line.split(',').map(|s| s.trim().to_string()));
                } else if line.len() < MAX_LANGUAGE_LEN {
                    languages.push((*line).to_string());
                }
            }
        }
    }

    // A buffer left open at end of input is a complete entry.
    if let Some(entry) = open_experience.take() {
        experience.push(entry);
    }
    if let Some(entry) = open_education.take() {
        education.push(entry);
    }

    ExtractedProfile {
        headline,
        summary: summary_parts.join(" "),
        location,
        experience,
        education,
        skills: dedup_keep_first(skills, 1),
        certifications: drop_short(certifications, 2),
        languages: drop_short(languages, 1),
    }
}

/// First line in the leading window containing a role keyword.
fn find_headline(lines: &[&str]) -> String {
    lines
        .iter()
        .take(HEADLINE_WINDOW)
        .find(|l| contains_any(l, HEADLINE_KEYWORDS))
        .map(|l| (*l).to_string())
        .unwrap_or_default()
}

/// First line anywhere containing a location keyword.
fn find_location(lines: &[&str]) -> String {
    lines
        .iter()
        .find(|l| contains_any(l, LOCATION_KEYWORDS))
        .map(|l| (*l).to_string())
        .unwrap_or_default()
}

fn match_section_header(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    SECTION_HEADERS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, section)| *section)
}

fn starts_with_section_name(line: &str) -> bool {
    let lower = line.to_lowercase();
    SECTION_HEADERS.iter().any(|(name, _)| lower.starts_with(name))
}

fn contains_any(line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| line.contains(k))
}

fn is_bullet(line: &str) -> bool {
    line.starts_with('•') || line.starts_with('-')
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['•', '-']).trim_start()
}

/// Order-preserving dedup that also drops entries of `min_len` or fewer
/// bytes. First occurrence wins; comparison is case-sensitive.
fn dedup_keep_first(items: Vec<String>, min_len: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| item.len() > min_len && seen.insert(item.clone()))
        .collect()
}

fn drop_short(items: Vec<String>, min_len: usize) -> Vec<String> {
    items.into_iter().filter(|item| item.len() > min_len).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
John Smith
Senior Software Engineer at Acme
San Francisco Bay Area

Summary
Building distributed systems for a decade.
Focused on reliability and developer tooling.

Experience
2020 - Present
Senior Software Engineer
Acme Corp
• Led migration to event-driven architecture
• Mentored four junior engineers
2016 - 2020
Software Engineer
Initech
• Built billing pipeline

Education
2012 - 2016
BS Computer Science
State University

Skills
Rust, PostgreSQL, Kubernetes
• Terraform
Distributed systems

Certifications
AWS Certified Solutions Architect
Issued Jan 2023

Languages
English, Spanish
German
";

    #[test]
    fn empty_input_yields_empty_profile() {
        let profile = extract("");
        assert_eq!(profile, ExtractedProfile::default());
    }

    #[test]
    fn whitespace_only_input_yields_empty_profile() {
        let profile = extract("  \n\n\t\n   \n");
        assert_eq!(profile, ExtractedProfile::default());
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract(FIXTURE);
        let second = extract(FIXTURE);
        assert_eq!(first, second);
    }

    #[test]
    fn fixture_sections_land_in_their_buckets() {
        let profile = extract(FIXTURE);

        assert_eq!(profile.headline, "Senior Software Engineer at Acme");
        assert_eq!(profile.location, "San Francisco Bay Area");
        assert_eq!(
            profile.summary,
            "Building distributed systems for a decade. Focused on reliability and developer tooling."
        );

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "Senior Software Engineer");
        assert_eq!(profile.experience[0].company, "Acme Corp");
        assert_eq!(profile.experience[0].duration, "2020 - Present");
        assert!(profile.experience[0].description.contains("event-driven"));
        assert!(profile.experience[0].description.contains("Mentored"));
        assert_eq!(profile.experience[1].company, "Initech");

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].degree, "BS Computer Science");
        assert_eq!(profile.education[0].school, "State University");
        assert_eq!(profile.education[0].duration, "2012 - 2016");
        assert_eq!(profile.education[0].field, "");

        assert_eq!(
            profile.skills,
            vec!["Rust", "PostgreSQL", "Kubernetes", "Terraform", "Distributed systems"]
        );
        assert_eq!(profile.certifications, vec!["AWS Certified Solutions Architect"]);
        assert_eq!(profile.languages, vec!["English", "Spanish", "German"]);
    }

    #[test]
    fn experience_entry_fills_title_then_company_then_bullets() {
        let profile = extract(
            "Experience\n2020 - Present\nSenior Engineer\nAcme Corp\n• Did X\nEducation\n2016 - 2020\nBS Computer Science\nMIT",
        );
        assert_eq!(profile.experience.len(), 1);
        let entry = &profile.experience[0];
        assert_eq!(entry.title, "Senior Engineer");
        assert_eq!(entry.company, "Acme Corp");
        assert!(entry.description.contains("Did X"));

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].degree, "BS Computer Science");
        assert_eq!(profile.education[0].school, "MIT");
    }

    #[test]
    fn duplicate_skills_keep_first_occurrence() {
        let profile = extract("Skills\nPython, Python, Go\nGo");
        assert_eq!(profile.skills, vec!["Python", "Go"]);
    }

    #[test]
    fn skill_dedup_is_case_sensitive() {
        let profile = extract("Skills\nPython, python");
        assert_eq!(profile.skills, vec!["Python", "python"]);
    }

    #[test]
    fn headline_outside_leading_window_is_missed() {
        let mut lines: Vec<String> = (1..=14).map(|i| format!("filler line {i}")).collect();
        lines.push("Senior Platform Engineer".to_string());
        let profile = extract(&lines.join("\n"));
        assert_eq!(profile.headline, "");
    }

    #[test]
    fn headline_within_leading_window_is_found() {
        let text = "one\ntwo\nthree\nLead Designer\nfive";
        assert_eq!(extract(text).headline, "Lead Designer");
    }

    #[test]
    fn consecutive_year_ranges_produce_sparse_entries() {
        let profile = extract("Experience\n2019 - 2020\n2021 - 2022");
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].duration, "2019 - 2020");
        assert_eq!(profile.experience[0].title, "");
        assert_eq!(profile.experience[0].company, "");
        assert_eq!(profile.experience[0].description, "");
        assert_eq!(profile.experience[1].duration, "2021 - 2022");
    }

    #[test]
    fn open_buffers_flush_at_end_of_input() {
        let profile = extract("Experience\n2022 - Present\nStaff Engineer\nGlobex");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Staff Engineer");
    }

    #[test]
    fn year_range_trigger_accepts_dash_variants_and_case() {
        for duration in ["2019 - 2022", "2019-2022", "2020 – Present", "2021-current", "2021 - PRESENT"] {
            let profile = extract(&format!("Experience\n{duration}"));
            assert_eq!(profile.experience.len(), 1, "failed for {duration:?}");
            assert_eq!(profile.experience[0].duration, duration);
        }
    }

    #[test]
    fn year_bearing_line_never_becomes_a_title() {
        let profile = extract("Experience\n2020 - Present\nJoined in 2020\nAcme Corp");
        let entry = &profile.experience[0];
        // The date-like line falls through to the company slot; the title
        // stays open and the next clean line claims it.
        assert_eq!(entry.company, "Joined in 2020");
        assert_eq!(entry.title, "Acme Corp");
    }

    #[test]
    fn long_line_is_rejected_as_company() {
        let long = "x".repeat(120);
        let profile = extract(&format!("Experience\n2020 - Present\nEngineer\n{long}\nAcme"));
        let entry = &profile.experience[0];
        assert_eq!(entry.title, "Engineer");
        assert_eq!(entry.company, "Acme");
    }

    #[test]
    fn non_bullet_line_after_title_and_company_is_dropped() {
        let profile = extract("Experience\n2020 - Present\nEngineer\nAcme\nFreeform note\n• Real bullet");
        let entry = &profile.experience[0];
        assert_eq!(entry.description, "• Real bullet");
    }

    #[test]
    fn experience_lines_before_any_duration_are_ignored() {
        let profile = extract("Experience\nEngineer\nAcme Corp\n2020 - Present\nStaff Engineer");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Staff Engineer");
        assert_eq!(profile.experience[0].company, "");
    }

    #[test]
    fn header_matching_requires_exact_line() {
        // "Experience:" is not a header, so the pass never leaves Preamble
        // and the line after it is not bucketed.
        let profile = extract("Experience:\n2020 - Present\nEngineer");
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn header_matching_is_case_insensitive() {
        let profile = extract("EXPERIENCE\n2020 - Present\nEngineer\nAcme");
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn work_experience_synonym_is_recognized() {
        let profile = extract("Work Experience\n2018 - 2019\nEngineer\nAcme");
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn summary_accumulates_across_lines() {
        let profile = extract("About\nFirst sentence.\nSecond sentence.");
        assert_eq!(profile.summary, "First sentence. Second sentence.");
    }

    #[test]
    fn summary_skips_lines_that_look_like_section_starts() {
        let profile = extract("Summary\nSolid track record.\nExperience: ten years\nStill here.");
        assert_eq!(profile.summary, "Solid track record. Still here.");
    }

    #[test]
    fn bare_year_education_trigger_leaves_duration_empty() {
        let profile = extract("Education\nGraduated 2016\nBS Computer Science\nState University");
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].duration, "");
        assert_eq!(profile.education[0].degree, "BS Computer Science");
    }

    #[test]
    fn education_school_fills_when_no_degree_keyword_matches() {
        let profile = extract("Education\n2014 - 2018\nRiverside College");
        assert_eq!(profile.education[0].school, "Riverside College");
        assert_eq!(profile.education[0].degree, "");
    }

    #[test]
    fn skills_comma_split_takes_precedence_over_length() {
        let long_list = "Rust, Go, Python, TypeScript, Kubernetes, PostgreSQL, Redis, Kafka";
        assert!(long_list.len() >= MAX_SKILL_LEN);
        let profile = extract(&format!("Skills\n{long_list}"));
        assert_eq!(profile.skills.len(), 8);
    }

    #[test]
    fn bare_skill_line_at_limit_is_dropped() {
        let at_limit = "y".repeat(MAX_SKILL_LEN);
        let profile = extract(&format!("Skills\n{at_limit}\nRust"));
        assert_eq!(profile.skills, vec!["Rust"]);
    }

    #[test]
    fn single_char_skills_are_filtered() {
        let profile = extract("Skills\nC, Go, R");
        assert_eq!(profile.skills, vec!["Go"]);
    }

    #[test]
    fn certification_issued_lines_are_skipped() {
        let profile = extract("Certifications\n• CKA Certification\nIssued Mar 2022\nAB");
        // Bullet is stripped, the issuer line is dropped, and two-char
        // entries fall to the length filter.
        assert_eq!(profile.certifications, vec!["CKA Certification"]);
    }

    #[test]
    fn long_language_lines_are_dropped() {
        let profile = extract("Languages\nEnglish\nThis free-form sentence is far too long to be a language");
        assert_eq!(profile.languages, vec!["English"]);
    }

    #[test]
    fn location_prefers_first_match_in_document_order() {
        let profile = extract("Greater Boston Area\nSummary\nMoved from London last year.");
        assert_eq!(profile.location, "Greater Boston Area");
    }

    #[test]
    fn preamble_lines_do_not_leak_into_sections() {
        let profile = extract("Stray preamble line\nSkills\nRust");
        assert_eq!(profile.skills, vec!["Rust"]);
        assert_eq!(profile.summary, "");
    }
}
