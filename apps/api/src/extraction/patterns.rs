//! Shared extraction heuristics. Each regex lives behind one small named function
//! so it can be unit-tested on its own.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use url::Url;

use crate::models::resume::PRESENT;

static BLOCK_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n\s*").unwrap());

/// Month-name + year, year-month, month/year, bare year, or a present marker.
/// Alternation order matters: the regex engine is leftmost-first.
static DATE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}|\d{4}[/-]\d{1,2}\b|\d{1,2}/\d{4}|\d{4}|present|current|now)\b",
    )
    .unwrap()
});

static PRESENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:present|current|now)$").unwrap());

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\b\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\bhttps?://[^\s<>"')\]]+|\b(?:www\.)?(?:linkedin\.com|github\.com|twitter\.com|behance\.net|dribbble\.com|instagram\.com)/[^\s<>"')\]]+"#,
    )
    .unwrap()
});

static IMPACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:increased|decreased|improved|reduced|achieved|generated|saved|grew|expanded|launched)\s+(?:\S+\s+){0,4}?(?:by\s+)?(?:\d+(?:\.\d+)?%|\$[\d,]+(?:\.\d+)?[kmb]?|[\d,]+\+?\s+(?:users|customers|clients|sales|revenue))",
    )
    .unwrap()
});

static IMAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:jpe?g|png|gif|webp)$").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Blocks, lines, bullets
// ────────────────────────────────────────────────────────────────────────────

/// Splits a section into blocks separated by one or more blank lines.
pub fn split_blocks(text: &str) -> Vec<&str> {
    BLOCK_SEPARATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect()
}

/// Non-empty trimmed lines of a block.
pub fn block_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

fn strip_bullet(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if let Some(rest) = line.strip_prefix('•') {
        return Some(rest.trim());
    }
    for marker in ['-', '*'] {
        if let Some(rest) = line.strip_prefix(marker) {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return Some(rest.trim());
            }
        }
    }
    None
}

pub fn is_bullet_line(line: &str) -> bool {
    strip_bullet(line).is_some()
}

/// Breaks a description into points on bullet markers (•, -, *) that begin a
/// line. Text before the first bullet is kept as its own point; continuation
/// lines are folded into the preceding point.
pub fn extract_bullets(text: &str) -> Vec<String> {
    let mut points: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match strip_bullet(line) {
            Some(rest) => {
                if !current.is_empty() {
                    points.push(std::mem::take(&mut current));
                }
                current.push_str(rest);
            }
            None => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(line);
            }
        }
    }
    if !current.is_empty() {
        points.push(current);
    }

    points.retain(|p| !p.trim().is_empty());
    points
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

fn normalize_date_token(token: &str) -> String {
    if PRESENT_RE.is_match(token) {
        PRESENT.to_string()
    } else {
        token.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// All date tokens in order of appearance, present markers normalized.
pub fn date_tokens(text: &str) -> Vec<String> {
    DATE_TOKEN_RE
        .find_iter(text)
        .map(|m| normalize_date_token(m.as_str()))
        .collect()
}

/// Ordered `(start, end)` pair from the date tokens in `text`.
///
/// - no tokens → `("", "")`
/// - only present markers → `("", PRESENT)`
/// - a start with no following token → end defaults to `PRESENT`
pub fn extract_date_range(text: &str) -> (String, String) {
    let tokens = date_tokens(text);
    let Some(start_idx) = tokens.iter().position(|t| t != PRESENT) else {
        return if tokens.is_empty() {
            (String::new(), String::new())
        } else {
            (String::new(), PRESENT.to_string())
        };
    };
    let start = tokens[start_idx].clone();
    let end = tokens
        .get(start_idx + 1)
        .cloned()
        .unwrap_or_else(|| PRESENT.to_string());
    (start, end)
}

/// First date token in `text`, or empty.
pub fn extract_date(text: &str) -> String {
    date_tokens(text).into_iter().next().unwrap_or_default()
}

pub fn has_year(text: &str) -> bool {
    YEAR_RE.is_match(text)
}

/// True for lines such as `2020 - Present` or `Jan 2019 to Dec 2021`.
pub fn is_date_only(line: &str) -> bool {
    if !DATE_TOKEN_RE.is_match(line) {
        return false;
    }
    let rest = DATE_TOKEN_RE.replace_all(line, " ");
    rest.split_whitespace().all(|word| {
        word.eq_ignore_ascii_case("to")
            || word.eq_ignore_ascii_case("until")
            || !word.chars().any(char::is_alphanumeric)
    })
}

/// Removes date tokens and the punctuation left dangling around them.
pub fn strip_dates(text: &str) -> String {
    let without = DATE_TOKEN_RE.replace_all(text, "");
    without
        .replace("()", "")
        .trim_matches(|c: char| c.is_whitespace() || ",-–|()".contains(c))
        .to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Contact details and links
// ────────────────────────────────────────────────────────────────────────────

pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn find_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

pub fn contains_contact(line: &str) -> bool {
    EMAIL_RE.is_match(line) || PHONE_RE.is_match(line) || URL_RE.is_match(line)
}

/// Every URL in `text`, scheme-normalized and de-duplicated in order.
pub fn find_urls(text: &str) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for m in URL_RE.find_iter(text) {
        let raw = m.as_str().trim_end_matches(['.', ',', ';', ':']);
        let url = if raw.to_ascii_lowercase().starts_with("http") {
            raw.to_string()
        } else {
            format!("https://{raw}")
        };
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

pub fn is_url_only(line: &str) -> bool {
    URL_RE
        .find(line.trim())
        .is_some_and(|m| m.start() == 0 && m.end() == line.trim().len())
}

pub fn is_image_url(url: &str) -> bool {
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());
    IMAGE_URL_RE.is_match(&path)
}

/// Lowercased host without a leading `www.`.
pub fn url_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{domain}"))
}

const LINK_TYPES: &[(&str, &str)] = &[
    ("github.com", "github"),
    ("linkedin.com", "linkedin"),
    ("twitter.com", "twitter"),
    ("x.com", "twitter"),
    ("medium.com", "medium"),
    ("youtube.com", "youtube"),
    ("youtu.be", "youtube"),
    ("vimeo.com", "vimeo"),
    ("behance.net", "behance"),
    ("dribbble.com", "dribbble"),
    ("instagram.com", "instagram"),
];

/// Classifies a URL by host; anything unrecognized is a `website`.
pub fn link_type(url: &str) -> &'static str {
    let Some(host) = url_host(url) else {
        return "website";
    };
    LINK_TYPES
        .iter()
        .find(|(domain, _)| host_matches(&host, domain))
        .map(|(_, kind)| *kind)
        .unwrap_or("website")
}

/// Last non-empty path segment of a URL (query parameters used as a fallback).
pub fn url_handle(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url
            .split('/')
            .filter(|s| !s.is_empty())
            .last()
            .unwrap_or_default()
            .to_string();
    };
    if let Some(segment) = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
    {
        if !segment.eq_ignore_ascii_case("watch") {
            return segment.trim_start_matches('@').to_string();
        }
    }
    parsed
        .query_pairs()
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Impact phrases and technology tags
// ────────────────────────────────────────────────────────────────────────────

/// Verb + quantity phrases such as "increased conversion by 20%".
pub fn extract_impact(text: &str) -> Vec<String> {
    IMPACT_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

const DEFAULT_TECH_KEYWORDS: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "HTML",
    "CSS",
    "AWS",
    "Docker",
    "Kubernetes",
    "SQL",
    "MongoDB",
    "Git",
    "Rust",
    "PostgreSQL",
    "Redis",
    "GraphQL",
    "C++",
];

/// Matches free text against a keyword whitelist. Matching is
/// case-insensitive; results use the whitelist spelling.
#[derive(Debug, Clone)]
pub struct TechTagger {
    patterns: Vec<(String, Regex)>,
}

impl TechTagger {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { patterns: Vec::new() }.extend(keywords)
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TECH_KEYWORDS.iter().copied())
    }

    pub fn extend<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword = keyword.into();
            if keyword.trim().is_empty()
                || self
                    .patterns
                    .iter()
                    .any(|(k, _)| k.eq_ignore_ascii_case(&keyword))
            {
                continue;
            }
            let pattern = format!(
                r"(?i)(?:^|[^\w+#.])({})(?:$|[^\w+#])",
                regex::escape(&keyword)
            );
            match Regex::new(&pattern) {
                Ok(re) => self.patterns.push((keyword, re)),
                Err(e) => warn!(keyword = %keyword, "Skipping tech keyword: {e}"),
            }
        }
        self
    }

    /// Keywords found in `text`, de-duplicated, in first-seen order.
    pub fn tag(&self, text: &str) -> Vec<String> {
        let mut hits: Vec<(usize, &str)> = self
            .patterns
            .iter()
            .filter_map(|(keyword, re)| {
                re.captures(text)
                    .and_then(|c| c.get(1))
                    .map(|m| (m.start(), keyword.as_str()))
            })
            .collect();
        hits.sort_by_key(|(pos, _)| *pos);
        hits.into_iter().map(|(_, k)| k.to_string()).collect()
    }
}

impl Default for TechTagger {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_year_to_present() {
        let (start, end) = extract_date_range("2020 - Present");
        assert_eq!(start, "2020");
        assert_eq!(end, PRESENT);
    }

    #[test]
    fn test_date_range_compact_year_to_present() {
        assert_eq!(
            extract_date_range("2020-Present"),
            ("2020".to_string(), PRESENT.to_string())
        );
    }

    #[test]
    fn test_date_range_month_names() {
        let (start, end) = extract_date_range("Jan 2019 - Dec 2021");
        assert_eq!(start, "Jan 2019");
        assert_eq!(end, "Dec 2021");
        assert_ne!(start, end);
        assert_ne!(end, PRESENT);
    }

    #[test]
    fn test_words_with_month_prefixes_are_not_month_names() {
        assert_eq!(date_tokens("Ran the Marketing 2020 relaunch."), vec!["2020"]);
        assert_eq!(date_tokens("Junior 2019, Decorated 2021"), vec!["2019", "2021"]);
        assert_eq!(
            date_tokens("Sept 2019 - March 2021, Dec. 2022"),
            vec!["Sept 2019", "March 2021", "Dec. 2022"]
        );
        assert!(!is_date_only("Marketing 2020"));
    }

    #[test]
    fn test_date_range_year_span_and_numeric_months() {
        assert_eq!(
            extract_date_range("2016-2018"),
            ("2016".to_string(), "2018".to_string())
        );
        assert_eq!(
            extract_date_range("03/2019 – 2021-06"),
            ("03/2019".to_string(), "2021-06".to_string())
        );
    }

    #[test]
    fn test_date_range_defaults() {
        assert_eq!(extract_date_range("no dates here"), (String::new(), String::new()));
        assert_eq!(
            extract_date_range("Since 2018"),
            ("2018".to_string(), PRESENT.to_string())
        );
        assert_eq!(
            extract_date_range("current"),
            (String::new(), PRESENT.to_string())
        );
    }

    #[test]
    fn test_present_markers_normalize() {
        assert_eq!(date_tokens("2019 to now"), vec!["2019", PRESENT]);
        assert_eq!(date_tokens("2019 - CURRENT"), vec!["2019", PRESENT]);
    }

    #[test]
    fn test_is_date_only() {
        assert!(is_date_only("2020-Present"));
        assert!(is_date_only("Jan 2019 to Dec 2021"));
        assert!(is_date_only("(2018 – 2020)"));
        assert!(!is_date_only("Shipped 2020 release"));
        assert!(!is_date_only("Acme Corp"));
    }

    #[test]
    fn test_strip_dates() {
        assert_eq!(strip_dates("Best Paper (2020)"), "Best Paper");
        assert_eq!(strip_dates("ACM, 2021"), "ACM");
    }

    #[test]
    fn test_split_blocks_on_blank_lines() {
        let blocks = split_blocks("a\nb\n\n\nc\n  \nd");
        assert_eq!(blocks, vec!["a\nb", "c", "d"]);
        assert!(split_blocks("   ").is_empty());
    }

    #[test]
    fn test_extract_bullets() {
        let text = "Led the team.\n• Cut costs 20%\n- Shipped v2\n  across regions\n* Hired 3";
        let points = extract_bullets(text);
        assert_eq!(
            points,
            vec![
                "Led the team.",
                "Cut costs 20%",
                "Shipped v2 across regions",
                "Hired 3"
            ]
        );
    }

    #[test]
    fn test_hyphenated_word_is_not_a_bullet() {
        assert!(!is_bullet_line("-5% churn"));
        assert!(is_bullet_line("- item"));
        assert!(is_bullet_line("•item"));
    }

    #[test]
    fn test_find_email_and_phone() {
        let text = "Jane Doe\njane.doe@example.com | (555) 123-4567";
        assert_eq!(find_email(text).as_deref(), Some("jane.doe@example.com"));
        assert_eq!(find_phone(text).as_deref(), Some("(555) 123-4567"));
        assert_eq!(find_phone("2019-2021"), None);
    }

    #[test]
    fn test_find_urls_normalizes_and_dedupes() {
        let text = "See https://github.com/jane. Also linkedin.com/in/jane and https://github.com/jane";
        let urls = find_urls(text);
        assert_eq!(
            urls,
            vec!["https://github.com/jane", "https://linkedin.com/in/jane"]
        );
    }

    #[test]
    fn test_link_type_by_host() {
        assert_eq!(link_type("https://github.com/jane"), "github");
        assert_eq!(link_type("https://www.linkedin.com/in/jane"), "linkedin");
        assert_eq!(link_type("https://youtu.be/abc"), "youtube");
        assert_eq!(link_type("https://dropbox.com/s/x"), "website");
        assert_eq!(link_type("https://janedoe.dev"), "website");
    }

    #[test]
    fn test_url_handle() {
        assert_eq!(url_handle("https://instagram.com/jane.art/"), "jane.art");
        assert_eq!(url_handle("https://twitter.com/@jane"), "jane");
        assert_eq!(url_handle("https://www.youtube.com/watch?v=abc123"), "abc123");
    }

    #[test]
    fn test_image_url() {
        assert!(is_image_url("https://cdn.example.com/a/photo.JPG"));
        assert!(!is_image_url("https://example.com/gallery"));
    }

    #[test]
    fn test_extract_impact() {
        let text = "Increased revenue by 20% in Q3. Grew to 5,000 users. Managed a team.";
        let impact = extract_impact(text);
        assert_eq!(impact, vec!["Increased revenue by 20%", "Grew to 5,000 users"]);
        assert!(extract_impact("Managed a team.").is_empty());
    }

    #[test]
    fn test_tech_tagger_dedupes_in_first_seen_order() {
        let tags = TechTagger::with_defaults().tag("Built with TypeScript and React; React Native, docker, Java.");
        assert_eq!(tags, vec!["TypeScript", "React", "Docker", "Java"]);
    }

    #[test]
    fn test_tech_tagger_respects_word_boundaries() {
        let tags = TechTagger::with_defaults().tag("JavaScript on PostgreSQL");
        assert_eq!(tags, vec!["JavaScript", "PostgreSQL"]);
    }

    #[test]
    fn test_tech_tagger_is_extensible() {
        let tagger = TechTagger::with_defaults().extend(["Terraform", "rust"]);
        assert_eq!(tagger.tag("terraform + Rust"), vec!["Terraform", "Rust"]);
    }
}
