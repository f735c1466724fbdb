//! Section presence predicates, content assembly and asset discovery.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::extraction::patterns::{extract_impact, url_handle};
use crate::models::resume::{Experience, Recognition, Resume};
use crate::models::site::{ProfileType, SectionId, SiteAssets, Typography};

// ────────────────────────────────────────────────────────────────────────────
// Derived musician data
// ────────────────────────────────────────────────────────────────────────────

/// Checked in order; the first match wins, unmatched pieces are `Other`.
static REPERTOIRE_TAXONOMY: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        ("Classical", Regex::new(r"(?i)sonata|symphony|concerto|quartet|opus").unwrap()),
        ("Opera", Regex::new(r"(?i)aria|opera|libretto").unwrap()),
        (
            "Contemporary",
            Regex::new(r"(?i)\d{4}(?:-\d{2,4})?$|\b(?:premiere|commissioned)\b").unwrap(),
        ),
        ("Chamber", Regex::new(r"(?i)trio|quartet|quintet|ensemble").unwrap()),
    ]
});

const OTHER_CATEGORY: &str = "Other";

pub fn classify_piece(piece: &str) -> &'static str {
    REPERTOIRE_TAXONOMY
        .iter()
        .find(|(_, re)| re.is_match(piece))
        .map(|(category, _)| *category)
        .unwrap_or(OTHER_CATEGORY)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepertoireGroup {
    pub category: String,
    pub pieces: Vec<String>,
}

/// Programme pieces across all performances, bucketed by taxonomy. Categories
/// come out in taxonomy order and empty ones are omitted.
pub fn repertoire(resume: &Resume) -> Vec<RepertoireGroup> {
    let categories = REPERTOIRE_TAXONOMY
        .iter()
        .map(|(category, _)| *category)
        .chain(std::iter::once(OTHER_CATEGORY));

    let mut groups: Vec<RepertoireGroup> = categories
        .map(|category| RepertoireGroup {
            category: category.to_string(),
            pieces: Vec::new(),
        })
        .collect();

    for piece in resume.performances.iter().flat_map(|p| &p.program) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let category = classify_piece(piece);
        if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
            if !group.pieces.iter().any(|p| p == piece) {
                group.pieces.push(piece.to_string());
            }
        }
    }

    groups.retain(|g| !g.pieces.is_empty());
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub title: String,
}

/// YouTube and Vimeo links presented as performance videos.
pub fn media(resume: &Resume) -> Vec<MediaItem> {
    resume
        .links
        .iter()
        .filter(|l| l.link_type == "youtube" || l.link_type == "vimeo")
        .map(|l| MediaItem {
            media_type: "video".to_string(),
            url: l.url.clone(),
            title: format!("Performance {}", url_handle(&l.url)),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct Venture<'a> {
    #[serde(flatten)]
    experience: &'a Experience,
    impact: Vec<String>,
}

fn grants(resume: &Resume) -> Vec<&Recognition> {
    resume
        .recognitions
        .iter()
        .filter(|r| r.title.to_lowercase().contains("grant"))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Presence predicates
// ────────────────────────────────────────────────────────────────────────────

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

/// True when the section has something to show for this résumé.
pub fn has_content(section: SectionId, resume: &Resume) -> bool {
    match section {
        SectionId::Hero => non_blank(&resume.full_name),
        SectionId::About => non_blank(&resume.summary),
        SectionId::Skills | SectionId::Expertise => !resume.skills.is_empty(),
        SectionId::Projects => !resume.projects.is_empty(),
        SectionId::Experience | SectionId::Ventures => !resume.experience.is_empty(),
        SectionId::Education => !resume.education.is_empty(),
        SectionId::Achievements => !resume.recognitions.is_empty(),
        SectionId::Portfolio => !resume.portfolio.is_empty(),
        SectionId::Exhibitions => !resume.exhibitions.is_empty(),
        SectionId::Statement => non_blank(&resume.statement),
        SectionId::Performances => !resume.performances.is_empty(),
        SectionId::Repertoire => !repertoire(resume).is_empty(),
        SectionId::Media => !media(resume).is_empty(),
        SectionId::Research => !resume.research.is_empty(),
        SectionId::Publications => !resume.publications.is_empty(),
        SectionId::Teaching => !resume.teaching.is_empty(),
        SectionId::Contact => resume.has_contact(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content bag
// ────────────────────────────────────────────────────────────────────────────

fn insert(map: &mut Map<String, Value>, key: &str, value: Value) {
    map.insert(key.to_string(), value);
}

pub fn build_content(resume: &Resume, profile: ProfileType) -> Map<String, Value> {
    let mut content = Map::new();
    insert(&mut content, "full_name", json!(resume.full_name));
    insert(&mut content, "title", json!(resume.title));
    insert(&mut content, "email", json!(resume.email));
    insert(&mut content, "phone", json!(resume.phone));
    insert(&mut content, "location", json!(resume.location));
    insert(
        &mut content,
        "contact",
        json!({
            "email": resume.email,
            "phone": resume.phone,
            "location": resume.location,
        }),
    );
    insert(&mut content, "summary", json!(resume.summary));
    insert(&mut content, "skills", json!(resume.skills));
    insert(&mut content, "experience", json!(resume.experience));
    insert(&mut content, "education", json!(resume.education));
    insert(&mut content, "links", json!(resume.links));
    insert(&mut content, "languages", json!(resume.languages));

    match profile {
        ProfileType::Developer => {
            insert(&mut content, "projects", json!(resume.projects));
            insert(
                &mut content,
                "github_url",
                json!(resume.link_of_type("github").map(|l| &l.url)),
            );
        }
        ProfileType::Entrepreneur => {
            let ventures: Vec<Venture> = resume
                .experience
                .iter()
                .map(|experience| Venture {
                    experience,
                    impact: extract_impact(&experience.description),
                })
                .collect();
            insert(&mut content, "ventures", json!(ventures));
            insert(&mut content, "achievements", json!(resume.recognitions));
            insert(&mut content, "expertise", json!(resume.skills));
        }
        ProfileType::Artist => {
            insert(&mut content, "portfolio", json!(resume.portfolio));
            insert(&mut content, "exhibitions", json!(resume.exhibitions));
            insert(&mut content, "statement", json!(resume.statement));
            insert(&mut content, "press", json!(resume.press));
            insert(&mut content, "representation", json!(resume.representation));
            insert(&mut content, "social_media", json!(resume.social_media));
        }
        ProfileType::Musician => {
            insert(&mut content, "performances", json!(resume.performances));
            insert(&mut content, "repertoire", json!(repertoire(resume)));
            insert(&mut content, "media", json!(media(resume)));
        }
        ProfileType::Academic => {
            insert(&mut content, "research", json!(resume.research));
            insert(&mut content, "publications", json!(resume.publications));
            insert(&mut content, "teaching", json!(resume.teaching));
            insert(&mut content, "grants", json!(grants(resume)));
        }
    }

    content
}

// ────────────────────────────────────────────────────────────────────────────
// Assets
// ────────────────────────────────────────────────────────────────────────────

const CONTACT_ICONS: [&str; 3] = ["email", "phone", "location"];

fn link_icon(link_type: &str) -> Option<&'static str> {
    match link_type {
        "github" => Some("github"),
        "linkedin" => Some("linkedin"),
        "twitter" => Some("twitter"),
        "website" => Some("website"),
        "youtube" => Some("youtube"),
        "vimeo" => Some("video"),
        "behance" => Some("behance"),
        "dribbble" => Some("dribbble"),
        _ => None,
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

pub fn build_assets(resume: &Resume, typography: &Typography) -> SiteAssets {
    let mut fonts = Vec::new();
    push_unique(&mut fonts, &typography.heading);
    push_unique(&mut fonts, &typography.body);

    let mut icons = Vec::new();
    for icon in CONTACT_ICONS {
        push_unique(&mut icons, icon);
    }
    for icon in resume.links.iter().filter_map(|l| link_icon(&l.link_type)) {
        push_unique(&mut icons, icon);
    }

    let mut images = Vec::new();
    let portfolio_images = resume.portfolio.iter().flat_map(|p| &p.images);
    let project_images = resume.projects.iter().flat_map(|p| &p.images);
    for image in portfolio_images.chain(project_images) {
        push_unique(&mut images, image);
    }

    SiteAssets {
        fonts,
        icons,
        images,
    }
}
