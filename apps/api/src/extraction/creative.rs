//! Extractors for artist and musician résumés: portfolio, exhibitions,
//! performances, press, gallery representation and social profiles.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{
    block_lines, extract_date, extract_date_range, find_urls, is_date_only, is_image_url,
    split_blocks, url_handle, url_host,
};
use crate::models::resume::{
    Exhibition, ExhibitionType, Performance, PortfolioItem, PressMention, Representation,
    SocialProfile,
};

static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

static EXHIBITION_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(solo|group|featured)\]").unwrap());

static AWARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:award|prize|grant|fellowship|residency|honor)(?:ed)?:?\s+([^,\n]+)")
        .unwrap()
});

/// `"Title", Publication`
static PRESS_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s*,\s*([^,\n]+)"#).unwrap());

/// `"Title", Publication, 2020`
static PRESS_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s*,\s*([^,]+),\s*(\d{4})"#).unwrap());

/// `"Quote" - Source`
static REVIEW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"\s*-\s*([^,\n]+)"#).unwrap());

static VIDEO_EXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:mp4|mov|avi)$").unwrap());

static LABELED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:role|ensemble|conductor|program|curator):").unwrap());

static ROLE_RE: LazyLock<Regex> = LazyLock::new(|| labeled_regex("role"));
static ENSEMBLE_RE: LazyLock<Regex> = LazyLock::new(|| labeled_regex("ensemble"));
static CONDUCTOR_RE: LazyLock<Regex> = LazyLock::new(|| labeled_regex("conductor"));
static PROGRAM_RE: LazyLock<Regex> = LazyLock::new(|| labeled_regex("program"));
static CURATOR_RE: LazyLock<Regex> = LazyLock::new(|| labeled_regex("curator"));

fn labeled_regex(label: &str) -> Regex {
    Regex::new(&format!(r"(?im)\b{label}:\s*([^,\n]+)")).unwrap()
}

/// Value after `Label:` anywhere in the block, up to a comma or line end.
fn labeled_field(block: &str, re: &Regex) -> Option<String> {
    re.captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Lines that carry positional data (no date-only, labeled or quoted lines).
fn positional_lines(block: &str) -> Vec<&str> {
    block_lines(block)
        .into_iter()
        .filter(|l| !is_date_only(l) && !LABELED_LINE_RE.is_match(l) && !l.starts_with('"'))
        .collect()
}

fn extract_awards(text: &str) -> Vec<String> {
    AWARD_RE
        .captures_iter(text)
        .map(|c| c[1].trim().to_string())
        .collect()
}

fn extract_press_references(text: &str) -> Vec<String> {
    PRESS_REF_RE
        .captures_iter(text)
        .map(|c| format!("{} ({})", c[1].trim(), c[2].trim()))
        .collect()
}

fn is_video_url(url: &str) -> bool {
    VIDEO_EXT_RE.is_match(url)
        || url_host(url).is_some_and(|h| {
            h.ends_with("youtube.com") || h == "youtu.be" || h.ends_with("vimeo.com")
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Portfolio
// ────────────────────────────────────────────────────────────────────────────

/// Title, optional `[Category]` line, then description.
pub fn extract_portfolio(text: &str) -> Vec<PortfolioItem> {
    split_blocks(text)
        .into_iter()
        .filter_map(|block| {
            let lines = block_lines(block);
            let title = lines.first()?.to_string();

            let category = lines
                .get(1)
                .and_then(|l| CATEGORY_RE.captures(l))
                .map(|c| c[1].trim().to_string());
            let skip = if category.is_some() { 2 } else { 1 };
            let description = lines[skip.min(lines.len())..].join("\n");

            let urls = find_urls(block);
            Some(PortfolioItem {
                title,
                category: category.unwrap_or_else(|| "Other".to_string()),
                url: urls.first().cloned().unwrap_or_default(),
                images: urls.iter().filter(|u| is_image_url(u)).cloned().collect(),
                videos: urls.iter().filter(|u| is_video_url(u)).cloned().collect(),
                awards: extract_awards(&description),
                press: extract_press_references(&description),
                description,
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Exhibitions & performances
// ────────────────────────────────────────────────────────────────────────────

/// Title, venue, location lines; `[solo|group|featured]` anywhere in the block.
pub fn extract_exhibitions(text: &str) -> Vec<Exhibition> {
    split_blocks(text)
        .into_iter()
        .filter_map(|block| {
            let lines = positional_lines(block);
            let title = EXHIBITION_TYPE_RE.replace_all(lines.first()?, "").trim().to_string();
            let venue = lines.get(1).map(|l| l.to_string()).unwrap_or_default();
            if title.is_empty() || venue.is_empty() {
                return None;
            }

            let exhibition_type = EXHIBITION_TYPE_RE
                .captures(block)
                .map(|c| match c[1].to_ascii_lowercase().as_str() {
                    "solo" => ExhibitionType::Solo,
                    "featured" => ExhibitionType::Featured,
                    _ => ExhibitionType::Group,
                })
                .unwrap_or_default();

            let description = lines.iter().skip(3).copied().collect::<Vec<_>>().join("\n");
            let (start_date, end_date) = extract_date_range(block);

            Some(Exhibition {
                title,
                venue,
                location: lines.get(2).map(|l| l.to_string()).unwrap_or_default(),
                start_date,
                end_date,
                exhibition_type,
                curator: labeled_field(block, &CURATOR_RE).unwrap_or_default(),
                press: extract_press_references(block),
                description,
            })
        })
        .collect()
}

/// Requires title, venue and a date. Role defaults to `Performer`.
pub fn extract_performances(text: &str) -> Vec<Performance> {
    split_blocks(text)
        .into_iter()
        .filter_map(|block| {
            let lines = positional_lines(block);
            let title = lines.first()?.to_string();
            let venue = lines.get(1)?.to_string();
            let date = extract_date(block);
            if date.is_empty() {
                return None;
            }

            let program = labeled_field(block, &PROGRAM_RE)
                .map(|p| {
                    p.split(';')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            let reviews = REVIEW_RE
                .captures_iter(block)
                .map(|c| format!("{} - {}", c[1].trim(), c[2].trim()))
                .collect();

            Some(Performance {
                title,
                venue,
                location: lines.get(2).map(|l| l.to_string()).unwrap_or_default(),
                date,
                role: labeled_field(block, &ROLE_RE).unwrap_or_else(|| "Performer".to_string()),
                ensemble: labeled_field(block, &ENSEMBLE_RE).unwrap_or_default(),
                conductor: labeled_field(block, &CONDUCTOR_RE).unwrap_or_default(),
                program,
                reviews,
            })
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Statement, press, representation, social
// ────────────────────────────────────────────────────────────────────────────

pub fn extract_statement(text: &str) -> String {
    text.trim().to_string()
}

pub fn extract_press(text: &str) -> Vec<PressMention> {
    text.lines()
        .filter_map(|line| {
            let caps = PRESS_LINE_RE.captures(line)?;
            Some(PressMention {
                title: caps[1].trim().to_string(),
                publication: caps[2].trim().to_string(),
                date: caps[3].to_string(),
                url: find_urls(line).into_iter().next().unwrap_or_default(),
            })
        })
        .collect()
}

/// `Gallery, Location[, ...] [url]` per line.
pub fn extract_representation(text: &str) -> Vec<Representation> {
    text.lines()
        .filter_map(|line| {
            let url = find_urls(line).into_iter().next().unwrap_or_default();
            let rest = if url.is_empty() {
                line.to_string()
            } else {
                line.replace(&url, "")
                    .replace(url.trim_start_matches("https://"), "")
            };
            let mut parts = rest.split(',').map(str::trim);
            let gallery = parts.next().filter(|s| !s.is_empty())?.to_string();
            let location = parts.next().filter(|s| !s.is_empty())?.to_string();
            Some(Representation {
                gallery,
                location,
                url,
            })
        })
        .collect()
}

const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("instagram.com", "Instagram"),
    ("twitter.com", "Twitter"),
    ("x.com", "Twitter"),
    ("facebook.com", "Facebook"),
    ("linkedin.com", "LinkedIn"),
    ("youtube.com", "YouTube"),
    ("vimeo.com", "Vimeo"),
    ("behance.net", "Behance"),
    ("dribbble.com", "Dribbble"),
    ("artstation.com", "ArtStation"),
];

pub fn social_platform(url: &str) -> Option<&'static str> {
    let host = url_host(url)?;
    SOCIAL_PLATFORMS
        .iter()
        .find(|(domain, _)| host == *domain || host.ends_with(&format!(".{domain}")))
        .map(|(_, name)| *name)
}

/// Every social-network URL in the full text, handle = last path segment.
pub fn extract_social_media(full_text: &str) -> Vec<SocialProfile> {
    find_urls(full_text)
        .into_iter()
        .filter_map(|url| {
            let platform = social_platform(&url)?;
            Some(SocialProfile {
                platform: platform.to_string(),
                handle: url_handle(&url),
                url,
            })
        })
        .collect()
}
