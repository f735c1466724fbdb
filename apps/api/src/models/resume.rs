#![allow(dead_code)]

//! The résumé entity shared by every pipeline stage.
//!
//! Every collection defaults to empty and every struct derives `Default`, so a
//! partially-populated JSON document still deserializes into a structurally
//! complete `Resume`. Extraction never produces `None` holes inside records:
//! a missing field is an empty string.

use serde::{Deserialize, Serialize};

/// Canonical marker stored in `end_date` for ongoing entries.
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub recognitions: Vec<Recognition>,
    pub languages: Vec<LanguageSkill>,
    pub links: Vec<Link>,

    // Creative-profile records (artist / musician).
    pub portfolio: Vec<PortfolioItem>,
    pub exhibitions: Vec<Exhibition>,
    pub performances: Vec<Performance>,
    pub statement: String,
    pub press: Vec<PressMention>,
    pub representation: Vec<Representation>,
    pub social_media: Vec<SocialProfile>,

    // Academic records. Supplied by the editing surface, never extracted.
    pub research: Vec<ResearchItem>,
    pub publications: Vec<Publication>,
    pub teaching: Vec<TeachingItem>,
}

impl Resume {
    pub fn has_contact(&self) -> bool {
        !self.email.trim().is_empty()
            || self
                .phone
                .as_deref()
                .is_some_and(|p| !p.trim().is_empty())
    }

    pub fn link_of_type(&self, link_type: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.link_type == link_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Empty, a date token, or [`PRESENT`].
    pub end_date: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub organization: String,
    pub year: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub url: String,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

/// An award or honour. Recognitions are point-in-time, so only the first date
/// token of the block is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recognition {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(rename = "type")]
    pub link_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    pub title: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub awards: Vec<String>,
    pub press: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhibitionType {
    Solo,
    #[default]
    Group,
    Featured,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exhibition {
    pub title: String,
    pub venue: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub exhibition_type: ExhibitionType,
    pub curator: String,
    pub press: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Performance {
    pub title: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub role: String,
    pub ensemble: String,
    pub conductor: String,
    pub program: Vec<String>,
    pub reviews: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressMention {
    pub title: String,
    pub publication: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Representation {
    pub gallery: String,
    pub location: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProfile {
    pub platform: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub year: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeachingItem {
    pub course: String,
    pub institution: String,
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_deserializes_complete() {
        let json = r#"{"full_name": "Jane Doe", "experience": [{"title": "Dev"}]}"#;
        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.full_name, "Jane Doe");
        assert!(resume.email.is_empty());
        assert!(resume.skills.is_empty());
        assert_eq!(resume.experience[0].company, "");
        assert!(resume.experience[0].highlights.is_empty());
    }

    #[test]
    fn test_link_type_serializes_as_type() {
        let link = Link {
            link_type: "github".to_string(),
            url: "https://github.com/jane".to_string(),
        };
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["type"], "github");
    }

    #[test]
    fn test_has_contact_requires_non_blank() {
        let mut resume = Resume::default();
        assert!(!resume.has_contact());
        resume.phone = Some("  ".to_string());
        assert!(!resume.has_contact());
        resume.phone = Some("555-123-4567".to_string());
        assert!(resume.has_contact());
    }

    #[test]
    fn test_exhibition_type_default_is_group() {
        assert_eq!(ExhibitionType::default(), ExhibitionType::Group);
    }
}
