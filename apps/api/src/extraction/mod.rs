//! Heuristic résumé extraction.
//!
//! `raw text → split_sections → per-section extractors → Resume`. Nothing in
//! this module returns an error: missing data becomes an empty default.

pub mod creative;
pub mod handlers;
pub mod patterns;
pub mod personal;
pub mod records;
pub mod sections;

use tracing::debug;

use crate::extraction::patterns::TechTagger;
use crate::extraction::sections::{section, split_sections, HeadingVocabulary, SectionMap, HEADER};
use crate::models::resume::Resume;
use crate::models::site::ProfileType;

/// A parsed résumé along with the raw section buckets it was built from.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub resume: Resume,
    pub sections: SectionMap,
}

/// Owns the technology whitelist used to tag projects. The heading vocabulary
/// is chosen per call.
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    tagger: TechTagger,
}

impl ResumeExtractor {
    /// Extracts with the vocabulary suited to `profile`.
    pub fn extract_for_profile(&self, text: &str, profile: ProfileType) -> Extraction {
        self.extract(text, &HeadingVocabulary::for_profile(profile))
    }

    pub fn extract(&self, text: &str, vocabulary: &HeadingVocabulary) -> Extraction {
        let sections = split_sections(text, vocabulary);
        let personal = personal::extract_personal(section(&sections, HEADER), text);

        // Awards and certifications are recognitions under another heading.
        let recognitions = ["recognitions", "awards", "certifications"]
            .iter()
            .flat_map(|name| records::extract_recognitions(section(&sections, name)))
            .collect();

        let portfolio_text = match section(&sections, "portfolio") {
            "" => section(&sections, "works"),
            text => text,
        };

        let resume = Resume {
            full_name: personal.full_name,
            title: personal.title,
            email: personal.email,
            phone: personal.phone,
            location: personal.location,
            summary: section(&sections, "summary").to_string(),
            skills: records::extract_skills(section(&sections, "skills")),
            experience: records::extract_experience(section(&sections, "experience")),
            education: records::extract_education(section(&sections, "education")),
            projects: records::extract_projects(section(&sections, "projects"), &self.tagger),
            recognitions,
            languages: records::extract_languages(section(&sections, "languages")),
            links: personal.links,
            portfolio: creative::extract_portfolio(portfolio_text),
            exhibitions: creative::extract_exhibitions(section(&sections, "exhibitions")),
            performances: creative::extract_performances(section(&sections, "performances")),
            statement: creative::extract_statement(section(&sections, "statement")),
            press: creative::extract_press(section(&sections, "press")),
            representation: creative::extract_representation(section(&sections, "representation")),
            social_media: creative::extract_social_media(text),
            ..Resume::default()
        };

        debug!(
            sections = sections.len(),
            experience = resume.experience.len(),
            education = resume.education.len(),
            projects = resume.projects.len(),
            skills = resume.skills.len(),
            portfolio = resume.portfolio.len(),
            performances = resume.performances.len(),
            "Extracted résumé"
        );

        Extraction { resume, sections }
    }
}
