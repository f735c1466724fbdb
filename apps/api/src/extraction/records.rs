//! Positional extractors for the standard résumé sections.
//!
//! Every extractor splits its section into blank-line separated blocks and reads
//! each block line by line. A block missing the fields that identify a record
//! (e.g. an experience without a company) is dropped rather than returned half
//! filled.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{
    block_lines, extract_bullets, extract_date, extract_date_range, find_urls, has_year,
    is_bullet_line, is_date_only, is_image_url, is_url_only, split_blocks, strip_dates,
    TechTagger,
};
use crate::models::resume::{Education, Experience, LanguageSkill, Project, Recognition};

static SKILL_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\n•·|;]").unwrap());

static NAME_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\((\d{4})\)\s*$").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Shared block anatomy
// ────────────────────────────────────────────────────────────────────────────

/// Title line plus organization/location, and where the free text begins.
#[derive(Debug, Default, PartialEq)]
struct EntryHead {
    title: String,
    organization: String,
    location: String,
    body_start: usize,
}

fn split_affiliation(text: &str) -> (String, String) {
    let mut parts = text.splitn(2, '|').map(str::trim);
    let organization = parts.next().unwrap_or_default();
    let organization = if has_year(organization) {
        strip_dates(organization)
    } else {
        organization.to_string()
    };
    let location = parts
        .next()
        .filter(|l| !is_date_only(l))
        .unwrap_or_default()
        .to_string();
    (organization, location)
}

/// Two layouts are recognized:
/// - `Title / Organization | Location` on one line
/// - `Title` then `Organization | Location` on the next line
fn parse_entry_head(lines: &[&str]) -> EntryHead {
    let Some(first) = lines.first() else {
        return EntryHead::default();
    };

    if let Some((title, rest)) = first.split_once(" / ") {
        let (organization, location) = split_affiliation(rest);
        return EntryHead {
            title: title.trim().to_string(),
            organization,
            location,
            body_start: 1,
        };
    }

    match lines.get(1) {
        Some(second) if !is_date_only(second) && !is_bullet_line(second) => {
            let (organization, location) = split_affiliation(second);
            EntryHead {
                title: first.to_string(),
                organization,
                location,
                body_start: 2,
            }
        }
        _ => EntryHead {
            title: first.to_string(),
            body_start: 1,
            ..EntryHead::default()
        },
    }
}

/// Date range from the first line after the title that carries a year.
fn block_date_range(lines: &[&str]) -> (String, String) {
    lines
        .iter()
        .skip(1)
        .find(|l| has_year(l))
        .map(|l| extract_date_range(l))
        .unwrap_or_default()
}

/// Remaining lines minus the date-only ones.
fn block_description(lines: &[&str], from: usize) -> String {
    lines
        .iter()
        .skip(from)
        .filter(|l| !is_date_only(l))
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Experience & education
// ────────────────────────────────────────────────────────────────────────────

pub fn extract_experience(text: &str) -> Vec<Experience> {
    split_blocks(text)
        .into_iter()
        .filter_map(|block| {
            let lines = block_lines(block);
            let head = parse_entry_head(&lines);
            if head.title.is_empty() || head.organization.is_empty() {
                return None;
            }
            let (start_date, end_date) = block_date_range(&lines);
            let description = block_description(&lines, head.body_start);
            Some(Experience {
                title: head.title,
                company: head.organization,
                location: head.location,
                start_date,
                end_date,
                highlights: extract_bullets(&description),
                description,
            })
        })
        .collect()
}

pub fn extract_education(text: &str) -> Vec<Education> {
    split_blocks(text)
        .into_iter()
        .filter_map(|block| {
            let lines = block_lines(block);
            let head = parse_entry_head(&lines);
            if head.title.is_empty() || head.organization.is_empty() {
                return None;
            }
            let (start_date, end_date) = block_date_range(&lines);
            let description = block_description(&lines, head.body_start);
            Some(Education {
                degree: head.title,
                institution: head.organization,
                location: head.location,
                start_date,
                end_date,
                achievements: extract_bullets(&description),
                description,
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

fn split_name_year(line: &str) -> (String, String) {
    match NAME_YEAR_RE.captures(line) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].to_string()),
        None => (line.trim().to_string(), String::new()),
    }
}

/// Line 1 names an organization only in blocks of three or more lines, and
/// only when it reads like a label rather than a sentence, bullet, link or date.
fn looks_like_organization(line: &str) -> bool {
    !is_bullet_line(line)
        && !is_url_only(line)
        && !is_date_only(line)
        && !line.trim_end().ends_with('.')
}

pub fn extract_projects(text: &str, tagger: &TechTagger) -> Vec<Project> {
    split_blocks(text)
        .into_iter()
        .filter_map(|block| {
            let lines = block_lines(block);
            let (name, year) = split_name_year(lines.first()?);
            if name.is_empty() {
                return None;
            }

            let has_organization = lines.len() >= 3 && looks_like_organization(lines[1]);
            let organization = if has_organization {
                lines[1].to_string()
            } else {
                String::new()
            };
            let body_start = if has_organization { 2 } else { 1 };

            let description = lines
                .iter()
                .skip(body_start)
                .filter(|l| !is_date_only(l) && !is_url_only(l))
                .copied()
                .collect::<Vec<_>>()
                .join("\n");

            let (start_date, end_date) = block_date_range(&lines);
            let (images, urls): (Vec<String>, Vec<String>) =
                find_urls(block).into_iter().partition(|u| is_image_url(u));

            Some(Project {
                name,
                organization,
                year,
                start_date,
                end_date,
                url: urls.into_iter().next().unwrap_or_default(),
                images,
                highlights: extract_bullets(&description),
                technologies: tagger.tag(block),
                description,
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Recognitions
// ────────────────────────────────────────────────────────────────────────────

/// A block whose every line reads `Title - Issuer` is a one-per-line list;
/// any other block is a single recognition.
pub fn extract_recognitions(text: &str) -> Vec<Recognition> {
    split_blocks(text)
        .into_iter()
        .flat_map(|block| {
            let lines = block_lines(block);
            let listed = lines.len() > 1
                && lines
                    .iter()
                    .all(|l| l.contains(" - ") && !is_date_only(l));
            if listed {
                lines.into_iter().filter_map(parse_recognition).collect()
            } else {
                parse_recognition(block).into_iter().collect::<Vec<_>>()
            }
        })
        .collect()
}

fn parse_recognition(block: &str) -> Option<Recognition> {
    let lines = block_lines(block);
    let first = *lines.first()?;

    let (title, issuer, body_start) = match first.split_once(" - ") {
        Some((title, issuer))
            if lines[1..].iter().all(|l| is_date_only(l) || is_url_only(l)) =>
        {
            (title.to_string(), issuer.to_string(), 1)
        }
        _ => match lines.get(1) {
            Some(second) if !is_date_only(second) && !is_url_only(second) => {
                (first.to_string(), second.to_string(), 2)
            }
            _ => (first.to_string(), String::new(), 1),
        },
    };

    let title = strip_dates(&title);
    if title.is_empty() {
        return None;
    }

    let description = lines
        .iter()
        .skip(body_start)
        .filter(|l| !is_date_only(l) && !is_url_only(l))
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    Some(Recognition {
        title,
        issuer: strip_dates(&issuer),
        date: extract_date(block),
        description,
        url: find_urls(block).into_iter().next().unwrap_or_default(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Skills & languages
// ────────────────────────────────────────────────────────────────────────────

/// Splits on commas, bullets, pipes and newlines. Duplicates are dropped.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for raw in SKILL_SEPARATOR_RE.split(text) {
        let skill = raw.trim().trim_start_matches(['-', '*']).trim();
        if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
            skills.push(skill.to_string());
        }
    }
    skills
}

/// One language per line: `English - Native`, `German: Fluent`,
/// `French (Intermediate)` or a bare language name.
pub fn extract_languages(text: &str) -> Vec<LanguageSkill> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['•', '-', '*'])
                .trim()
        })
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (language, proficiency) = if let Some((lang, rest)) = line.split_once('(') {
                (lang, rest.trim_end_matches(')'))
            } else if let Some(pair) = line.split_once(" - ") {
                pair
            } else if let Some(pair) = line.split_once(':') {
                pair
            } else if let Some(pair) = line.split_once('-') {
                pair
            } else {
                (line, "")
            };
            let language = language.trim();
            if language.is_empty() {
                return None;
            }
            Some(LanguageSkill {
                language: language.to_string(),
                proficiency: proficiency.trim().to_string(),
            })
        })
        .collect()
}
