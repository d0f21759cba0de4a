//! LinkedIn URL import stub.
//!
//! Scraping LinkedIn directly violates their terms of service. The real
//! integration goes through user consent plus the official API or a
//! browser-extension export; until that lands, every URL resolves to the
//! demo profile so the rest of the pipeline (scoring, suggestions,
//! persistence) runs end to end.

use crate::profile::extract::{EducationEntry, ExperienceEntry, ExtractedProfile};

/// Returns the demo profile for any accepted URL.
pub fn scrape_profile(_url: &str) -> ExtractedProfile {
    ExtractedProfile {
        headline: "Senior Software Engineer | Full Stack Developer".to_string(),
        summary: "Passionate software engineer with 8+ years of experience building \
                  scalable web applications. Expertise in React, Node.js, and cloud \
                  technologies. Strong advocate for clean code and agile methodologies."
            .to_string(),
        location: "San Francisco Bay Area".to_string(),
        experience: vec![
            ExperienceEntry {
                title: "Senior Software Engineer".to_string(),
                company: "Tech Innovators Inc.".to_string(),
                duration: "2020 - Present".to_string(),
                description: "Leading development of microservices architecture, \
                              mentoring junior developers"
                    .to_string(),
            },
            ExperienceEntry {
                title: "Software Engineer".to_string(),
                company: "Digital Solutions Co.".to_string(),
                duration: "2016 - 2020".to_string(),
                description: "Developed RESTful APIs and implemented CI/CD pipelines"
                    .to_string(),
            },
        ],
        education: vec![EducationEntry {
            school: "University of Technology".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            duration: "2012 - 2016".to_string(),
        }],
        skills: [
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Python",
            "AWS",
            "Docker",
            "Kubernetes",
            "GraphQL",
            "MongoDB",
        ]
        .map(str::to_string)
        .to_vec(),
        certifications: Vec::new(),
        languages: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::score::score_profile;

    #[test]
    fn demo_profile_is_complete_enough_to_score_well() {
        let profile = scrape_profile("https://linkedin.com/in/demo");
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.skills.len(), 10);

        // headline 15 + summary 20 + experience 25 + education 15 + skills 20.
        assert_eq!(score_profile(&profile).total, 95);
    }
}
