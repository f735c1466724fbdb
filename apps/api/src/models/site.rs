#![allow(dead_code)]

//! Site description types: profile types, theme descriptor, style overrides and
//! the `TemplateData` bag handed to the renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed category tag selecting default theme and section choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    #[default]
    Developer,
    Entrepreneur,
    Artist,
    Musician,
    Academic,
}

/// Title keywords checked in order; the first profile with a hit wins.
const TITLE_KEYWORDS: &[(ProfileType, &[&str])] = &[
    (
        ProfileType::Artist,
        &["designer", "artist", "creative", "photographer", "illustrator", "painter"],
    ),
    (
        ProfileType::Musician,
        &["musician", "composer", "pianist", "singer", "violinist", "conductor", "soprano"],
    ),
    (
        ProfileType::Academic,
        &["professor", "researcher", "phd", "lecturer", "postdoc", "scientist"],
    ),
    (
        ProfileType::Entrepreneur,
        &["founder", "ceo", "entrepreneur", "owner", "executive"],
    ),
    (
        ProfileType::Developer,
        &["developer", "engineer", "programmer", "architect", "devops"],
    ),
];

impl ProfileType {
    #[cfg(test)]
    pub const ALL: [ProfileType; 5] = [
        ProfileType::Developer,
        ProfileType::Entrepreneur,
        ProfileType::Artist,
        ProfileType::Musician,
        ProfileType::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Developer => "developer",
            ProfileType::Entrepreneur => "entrepreneur",
            ProfileType::Artist => "artist",
            ProfileType::Musician => "musician",
            ProfileType::Academic => "academic",
        }
    }

    /// Artist and musician résumés use the creative heading vocabulary.
    pub fn is_creative(&self) -> bool {
        matches!(self, ProfileType::Artist | ProfileType::Musician)
    }

    /// Guesses a profile type from a professional title. Falls back to developer.
    pub fn detect(title: &str) -> ProfileType {
        let title = title.to_lowercase();
        TITLE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| title.contains(kw)))
            .map(|(profile, _)| *profile)
            .unwrap_or_default()
    }
}

/// Identifier of a site section, in the order it appears on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Ventures,
    Achievements,
    Expertise,
    Portfolio,
    Exhibitions,
    Statement,
    Performances,
    Repertoire,
    Media,
    Research,
    Publications,
    Teaching,
    Contact,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Ventures => "ventures",
            SectionId::Achievements => "achievements",
            SectionId::Expertise => "expertise",
            SectionId::Portfolio => "portfolio",
            SectionId::Exhibitions => "exhibitions",
            SectionId::Statement => "statement",
            SectionId::Performances => "performances",
            SectionId::Repertoire => "repertoire",
            SectionId::Media => "media",
            SectionId::Research => "research",
            SectionId::Publications => "publications",
            SectionId::Teaching => "teaching",
            SectionId::Contact => "contact",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme descriptor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub colors: ColorPalette,
    pub typography: Typography,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub headings: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub heading: String,
    pub body: String,
    pub accent: String,
    pub sizes: TypeScale,
}

/// The five size tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub body: String,
    pub small: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub max_width: String,
    pub spacing: Spacing,
    pub border_radius: String,
    pub shadows: Shadows,
    pub use_icons: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub section: String,
    pub element: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadows {
    pub light: String,
    pub medium: String,
    pub strong: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Style overrides
// ────────────────────────────────────────────────────────────────────────────

/// Caller-supplied style tweaks. Each `Some` non-blank field replaces exactly
/// the matching default field and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub colors: ColorOverrides,
    pub fonts: FontOverrides,
    pub layout: LayoutOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOverrides {
    pub heading: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub max_width: Option<String>,
    pub section_spacing: Option<String>,
    pub element_spacing: Option<String>,
    pub border_radius: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateData
// ────────────────────────────────────────────────────────────────────────────

/// Theme + content + asset description; the direct input to rendering.
/// Recomputed on every conversion, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    pub name: String,
    pub profile_type: ProfileType,
    pub theme: ThemeDescriptor,
    /// Sections whose backing content is non-empty, in page order.
    pub sections: Vec<SectionId>,
    pub content: Map<String, Value>,
    pub assets: SiteAssets,
    pub meta: TemplateMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteAssets {
    pub fonts: Vec<String>,
    pub icons: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: String,
    pub theme_id: String,
    pub theme_name: String,
}

/// Final output of rendering: one HTML document, one stylesheet, one script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedAssets {
    pub html: String,
    pub css: String,
    pub script: String,
}
