//! Résumé → `TemplateData` conversion.
//!
//! 1. Resolve the theme: profile defaults patched field-by-field by overrides.
//! 2. Candidate sections: hero, about, profile sections, contact.
//! 3. Drop sections without backing content.
//! 4. Assemble the content bag (common + profile-specific fields).
//! 5. Collect fonts, icons and images.
//! 6. Stamp meta from the injected clock.
//!
//! Only `meta` depends on the clock; everything else is a pure function of
//! the inputs.

pub mod clock;
pub mod content;
pub mod handlers;
pub mod profiles;

use std::sync::Arc;

use tracing::debug;

use crate::conversion::clock::{Clock, SystemClock};
use crate::models::resume::Resume;
use crate::models::site::{
    ProfileType, SectionId, StyleOverrides, TemplateData, TemplateMeta, ThemeDescriptor,
};

pub const TEMPLATE_VERSION: &str = "1.0.0";

#[derive(Clone)]
pub struct ResumeConverter {
    clock: Arc<dyn Clock>,
}

impl Default for ResumeConverter {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl ResumeConverter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn convert(
        &self,
        resume: &Resume,
        profile: ProfileType,
        overrides: &StyleOverrides,
    ) -> TemplateData {
        let defaults = profiles::defaults(profile);
        let theme = apply_overrides(defaults.theme(), overrides);
        let sections = filter_sections(profiles::candidate_sections(profile), resume);
        let assets = content::build_assets(resume, &theme.typography);
        let content = content::build_content(resume, profile);

        let now = self.clock.now();
        let meta = TemplateMeta {
            created_at: now,
            updated_at: now,
            version: TEMPLATE_VERSION.to_string(),
            theme_id: format!("theme_{}_{}", profile.as_str(), now.timestamp_millis()),
            theme_name: defaults.theme_name.to_string(),
        };

        debug!(
            profile = profile.as_str(),
            sections = sections.len(),
            "Converted résumé to template data"
        );

        TemplateData {
            name: template_name(resume, profile),
            profile_type: profile,
            theme,
            sections,
            content,
            assets,
            meta,
        }
    }
}

pub fn filter_sections(candidates: Vec<SectionId>, resume: &Resume) -> Vec<SectionId> {
    candidates
        .into_iter()
        .filter(|section| content::has_content(*section, resume))
        .collect()
}

fn patch(target: &mut String, value: &Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        *target = value.to_string();
    }
}

/// Each non-blank override replaces exactly its own field. The accent font
/// always tracks the effective heading font.
pub fn apply_overrides(mut theme: ThemeDescriptor, overrides: &StyleOverrides) -> ThemeDescriptor {
    patch(&mut theme.colors.primary, &overrides.colors.primary);
    patch(&mut theme.colors.secondary, &overrides.colors.secondary);
    patch(&mut theme.colors.accent, &overrides.colors.accent);

    patch(&mut theme.typography.heading, &overrides.fonts.heading);
    patch(&mut theme.typography.body, &overrides.fonts.body);
    theme.typography.accent = theme.typography.heading.clone();

    patch(&mut theme.layout.max_width, &overrides.layout.max_width);
    patch(&mut theme.layout.spacing.section, &overrides.layout.section_spacing);
    patch(&mut theme.layout.spacing.element, &overrides.layout.element_spacing);
    patch(&mut theme.layout.border_radius, &overrides.layout.border_radius);

    theme
}

/// `jane-doe-developer-template`
fn template_name(resume: &Resume, profile: ProfileType) -> String {
    let slug = resume
        .full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    let slug = if slug.is_empty() { "untitled".to_string() } else { slug };
    format!("{slug}-{}-template", profile.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::clock::FixedClock;
    use crate::models::resume::{Experience, Link};
    use crate::models::site::{ColorOverrides, FontOverrides, LayoutOverrides};
    use chrono::{TimeZone, Utc};

    fn converter() -> ResumeConverter {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        ResumeConverter::new(Arc::new(FixedClock(instant)))
    }

    fn jane() -> Resume {
        Resume {
            full_name: "Jane Doe".to_string(),
            title: "Software Engineer".to_string(),
            email: "jane@example.com".to_string(),
            summary: "Builds things.".to_string(),
            skills: vec!["Rust".to_string()],
            experience: vec![Experience {
                title: "Senior Dev".to_string(),
                company: "Acme Corp".to_string(),
                ..Experience::default()
            }],
            links: vec![Link {
                link_type: "github".to_string(),
                url: "https://github.com/jane".to_string(),
            }],
            ..Resume::default()
        }
    }

    #[test]
    fn test_developer_sections_filtered_by_presence() {
        let data = converter().convert(&jane(), ProfileType::Developer, &StyleOverrides::default());
        assert_eq!(
            data.sections,
            vec![
                SectionId::Hero,
                SectionId::About,
                SectionId::Skills,
                SectionId::Experience,
                SectionId::Contact,
            ]
        );
    }

    #[test]
    fn test_empty_optional_lists_keep_only_hero_and_about() {
        let resume = Resume {
            full_name: "Jane Doe".to_string(),
            summary: "Builds things.".to_string(),
            ..Resume::default()
        };
        let data = converter().convert(&resume, ProfileType::Developer, &StyleOverrides::default());
        assert_eq!(data.sections, vec![SectionId::Hero, SectionId::About]);
    }

    #[test]
    fn test_musician_without_performances_omits_section() {
        assert!(profiles::candidate_sections(ProfileType::Musician).contains(&SectionId::Performances));
        let data = converter().convert(&jane(), ProfileType::Musician, &StyleOverrides::default());
        assert!(!data.sections.contains(&SectionId::Performances));
        assert!(!data.sections.contains(&SectionId::Repertoire));
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = StyleOverrides {
            colors: ColorOverrides {
                primary: Some("#ff0000".to_string()),
                accent: Some("   ".to_string()),
                ..ColorOverrides::default()
            },
            fonts: FontOverrides {
                heading: Some("Georgia".to_string()),
                ..FontOverrides::default()
            },
            layout: LayoutOverrides {
                section_spacing: Some("3rem".to_string()),
                ..LayoutOverrides::default()
            },
        };
        let data = converter().convert(&jane(), ProfileType::Developer, &overrides);
        let theme = &data.theme;
        assert_eq!(theme.colors.primary, "#ff0000");
        assert_eq!(theme.colors.secondary, "#2d3748");
        assert_eq!(theme.colors.accent, "#38b2ac");
        assert_eq!(theme.typography.heading, "Georgia");
        assert_eq!(theme.typography.accent, "Georgia");
        assert_eq!(theme.typography.body, "Inter");
        assert_eq!(theme.layout.spacing.section, "3rem");
        assert_eq!(theme.layout.spacing.element, "1.5rem");
        assert_eq!(data.assets.fonts, vec!["Georgia", "Inter"]);
    }

    #[test]
    fn test_conversion_is_deterministic_with_fixed_clock() {
        let c = converter();
        let a = c.convert(&jane(), ProfileType::Entrepreneur, &StyleOverrides::default());
        let b = c.convert(&jane(), ProfileType::Entrepreneur, &StyleOverrides::default());
        assert_eq!(a, b);
        assert_eq!(a.meta.version, "1.0.0");
        assert_eq!(a.meta.theme_name, "Entrepreneur Theme");
        assert!(a.meta.theme_id.starts_with("theme_entrepreneur_"));
        assert_eq!(a.meta.created_at, a.meta.updated_at);
    }

    #[test]
    fn test_template_name_slug() {
        let data = converter().convert(&jane(), ProfileType::Artist, &StyleOverrides::default());
        assert_eq!(data.name, "jane-doe-artist-template");
        let data = converter().convert(&Resume::default(), ProfileType::Artist, &StyleOverrides::default());
        assert_eq!(data.name, "untitled-artist-template");
    }

    #[test]
    fn test_sections_never_reference_empty_content() {
        for profile in ProfileType::ALL {
            let data = converter().convert(&jane(), profile, &StyleOverrides::default());
            for section in &data.sections {
                assert!(content::has_content(*section, &jane()));
            }
        }
    }
}
