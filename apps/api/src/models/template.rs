//! Template shapes accepted by the renderer.
//!
//! Two models are supported:
//! - `placeholder`: an html/css/script triple with `{{dotted.path}}` tokens.
//! - `blocks`: ordered sections of typed blocks bound to fixed résumé slices.

use serde::{Deserialize, Serialize};

use crate::models::site::{ProfileType, StyleOverrides};

/// A template as supplied by the catalog. Its profile type and overrides feed
/// the conversion step, so two templates with the same body but different
/// styling fingerprint differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_type: ProfileType,
    #[serde(default)]
    pub overrides: StyleOverrides,
    pub body: TemplateBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum TemplateBody {
    Placeholder(PlaceholderTemplate),
    Blocks(BlockTemplate),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderTemplate {
    pub html: String,
    pub css: String,
    pub script: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTemplate {
    pub sections: Vec<TemplateSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub kind: BlockKind,
}

/// Typed block content. Text fields left `None` (or containing `{{...}}`
/// tokens) are filled from the résumé at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Hero {
        #[serde(default)]
        heading: Option<String>,
        #[serde(default)]
        subheading: Option<String>,
    },
    Text {
        #[serde(default)]
        content: Option<String>,
    },
    Skills {
        #[serde(default)]
        items: Vec<SkillItem>,
    },
    Timeline {
        #[serde(default)]
        entries: Vec<TimelineEntry>,
    },
    Contact {
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        phone: Option<String>,
    },
    Gallery {
        #[serde(default)]
        images: Vec<String>,
    },
}

impl BlockKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Hero { .. } => "hero",
            BlockKind::Text { .. } => "text",
            BlockKind::Skills { .. } => "skills",
            BlockKind::Timeline { .. } => "timeline",
            BlockKind::Contact { .. } => "contact",
            BlockKind::Gallery { .. } => "gallery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub label: String,
    /// Strength in percent.
    pub value: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}
