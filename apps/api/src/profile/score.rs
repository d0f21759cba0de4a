//! Profile completeness scoring.
//!
//! A fixed additive rubric over the structured profile. Deterministic on
//! purpose: the score a user sees after import must not drift between
//! requests, so no model call is involved. Free-text advice comes from
//! [`crate::profile::suggest`] instead.

use serde::{Deserialize, Serialize};

use crate::profile::extract::ExtractedProfile;

/// Points for a non-empty headline.
const HEADLINE_POINTS: u8 = 15;
/// Points for a summary longer than [`SUMMARY_MIN_LEN`] bytes.
const SUMMARY_POINTS: u8 = 20;
/// Points for at least one experience entry.
const EXPERIENCE_POINTS: u8 = 25;
/// Points for at least one education entry.
const EDUCATION_POINTS: u8 = 15;
/// Points for reaching [`SKILLS_BASELINE`] skills.
const SKILLS_POINTS: u8 = 15;
/// Extra points for reaching [`SKILLS_BONUS_AT`] skills.
const SKILLS_BONUS_POINTS: u8 = 5;
/// Points for at least one certification.
const CERTIFICATION_POINTS: u8 = 5;

/// Summary must be strictly longer than this to earn its points.
const SUMMARY_MIN_LEN: usize = 100;
const SKILLS_BASELINE: usize = 5;
const SKILLS_BONUS_AT: usize = 10;

/// Per-section rubric breakdown. Serialized into
/// `profile_analyses.section_scores` and into import responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPoints {
    pub headline: u8,
    pub summary: u8,
    pub experience: u8,
    pub education: u8,
    pub skills: u8,
    pub certifications: u8,
}

/// Rubric result: the 0-100 total plus where the points came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileScore {
    pub total: u8,
    pub sections: SectionPoints,
}

/// Scores a structured profile against the fixed rubric. The weights sum
/// to exactly 100 for a fully filled profile.
pub fn score_profile(profile: &ExtractedProfile) -> ProfileScore {
    let mut sections = SectionPoints::default();

    if !profile.headline.is_empty() {
        sections.headline = HEADLINE_POINTS;
    }
    if profile.summary.len() > SUMMARY_MIN_LEN {
        sections.summary = SUMMARY_POINTS;
    }
    if !profile.experience.is_empty() {
        sections.experience = EXPERIENCE_POINTS;
    }
    if !profile.education.is_empty() {
        sections.education = EDUCATION_POINTS;
    }
    if profile.skills.len() >= SKILLS_BASELINE {
        sections.skills = SKILLS_POINTS;
        if profile.skills.len() >= SKILLS_BONUS_AT {
            sections.skills += SKILLS_BONUS_POINTS;
        }
    }
    if !profile.certifications.is_empty() {
        sections.certifications = CERTIFICATION_POINTS;
    }

    let total = sections.headline
        + sections.summary
        + sections.experience
        + sections.education
        + sections.skills
        + sections.certifications;

    ProfileScore { total, sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::extract::{EducationEntry, ExperienceEntry};

    fn full_profile() -> ExtractedProfile {
        ExtractedProfile {
            headline: "Senior Software Engineer".to_string(),
            summary: "x".repeat(SUMMARY_MIN_LEN + 1),
            location: "Berlin".to_string(),
            experience: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            skills: (0..SKILLS_BONUS_AT).map(|i| format!("skill-{i}")).collect(),
            certifications: vec!["CKA".to_string()],
            languages: vec!["English".to_string()],
        }
    }

    #[test]
    fn empty_profile_scores_zero() {
        let score = score_profile(&ExtractedProfile::default());
        assert_eq!(score.total, 0);
        assert_eq!(score.sections, SectionPoints::default());
    }

    #[test]
    fn full_profile_scores_one_hundred() {
        let score = score_profile(&full_profile());
        assert_eq!(score.total, 100);
    }

    #[test]
    fn summary_at_threshold_earns_nothing() {
        let mut profile = full_profile();
        profile.summary = "x".repeat(SUMMARY_MIN_LEN);
        assert_eq!(score_profile(&profile).sections.summary, 0);

        profile.summary.push('x');
        assert_eq!(score_profile(&profile).sections.summary, SUMMARY_POINTS);
    }

    #[test]
    fn skills_thresholds_are_inclusive() {
        let mut profile = ExtractedProfile::default();

        profile.skills = (0..4).map(|i| i.to_string()).collect();
        assert_eq!(score_profile(&profile).sections.skills, 0);

        profile.skills.push("4".to_string());
        assert_eq!(score_profile(&profile).sections.skills, SKILLS_POINTS);

        profile.skills = (0..9).map(|i| i.to_string()).collect();
        assert_eq!(score_profile(&profile).sections.skills, SKILLS_POINTS);

        profile.skills.push("9".to_string());
        assert_eq!(
            score_profile(&profile).sections.skills,
            SKILLS_POINTS + SKILLS_BONUS_POINTS
        );
    }

    #[test]
    fn single_entries_unlock_section_points() {
        let profile = ExtractedProfile {
            experience: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            certifications: vec!["AWS SAA".to_string()],
            ..ExtractedProfile::default()
        };
        let score = score_profile(&profile);
        assert_eq!(score.sections.experience, EXPERIENCE_POINTS);
        assert_eq!(score.sections.education, EDUCATION_POINTS);
        assert_eq!(score.sections.certifications, CERTIFICATION_POINTS);
        assert_eq!(score.total, 45);
    }

    #[test]
    fn total_matches_section_sum() {
        let profile = extract_like_profile();
        let score = score_profile(&profile);
        let sum = score.sections.headline
            + score.sections.summary
            + score.sections.experience
            + score.sections.education
            + score.sections.skills
            + score.sections.certifications;
        assert_eq!(score.total, sum);
    }

    fn extract_like_profile() -> ExtractedProfile {
        ExtractedProfile {
            headline: "Backend Developer".to_string(),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            ..ExtractedProfile::default()
        }
    }
}
