//! Header extraction: name, title, contact details, location and links.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{
    block_lines, contains_contact, find_email, find_phone, find_urls, link_type,
};
use crate::models::resume::Link;

/// `Proper Case[, Proper Case]`, e.g. `San Francisco, CA` or `Berlin`.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Z][A-Za-z.'\-]*(?:\s+[A-Z][A-Za-z.'\-]*)*(?:,\s*[A-Z][A-Za-z.'\-]*(?:\s+[A-Z][A-Za-z.'\-]*)*)?$",
    )
    .unwrap()
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<Link>,
}

/// Reads the header block positionally (line 0 name, line 1 title) and scans
/// `full_text` for email, phone and URLs, since those often sit in a footer.
pub fn extract_personal(header: &str, full_text: &str) -> PersonalInfo {
    let lines = block_lines(header);

    let full_name = lines
        .first()
        .filter(|l| !contains_contact(l))
        .map(|l| l.to_string())
        .unwrap_or_default();
    let title = lines
        .get(1)
        .filter(|l| !contains_contact(l))
        .map(|l| l.to_string())
        .unwrap_or_default();

    let location = lines
        .iter()
        .filter(|l| **l != full_name && **l != title)
        .flat_map(|l| l.split(['|', '•']))
        .map(str::trim)
        .find(|segment| is_location(segment))
        .map(str::to_string);

    let links = find_urls(full_text)
        .into_iter()
        .map(|url| Link {
            link_type: link_type(&url).to_string(),
            url,
        })
        .collect();

    PersonalInfo {
        full_name,
        title,
        email: find_email(full_text).unwrap_or_default(),
        phone: find_phone(full_text),
        location,
        links,
    }
}

pub fn is_location(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.chars().any(|c| c.is_ascii_digit())
        && !contains_contact(segment)
        && LOCATION_RE.is_match(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_title_and_contact_from_whole_text() {
        let header = "Jane Doe\nSoftware Engineer\nSan Francisco, CA";
        let full = format!("{header}\nSKILLS\nRust\n\nContact: jane@example.com, 555-123-4567");
        let info = extract_personal(header, &full);
        assert_eq!(info.full_name, "Jane Doe");
        assert_eq!(info.title, "Software Engineer");
        assert_eq!(info.email, "jane@example.com");
        assert_eq!(info.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(info.location.as_deref(), Some("San Francisco, CA"));
    }

    #[test]
    fn test_contact_line_in_title_position_is_not_a_title() {
        let header = "Jane Doe\njane@example.com | Berlin";
        let info = extract_personal(header, header);
        assert_eq!(info.title, "");
        assert_eq!(info.email, "jane@example.com");
        assert_eq!(info.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_location_rejects_digits() {
        assert!(!is_location("Suite 400, Main St"));
        assert!(!is_location("jane@example.com"));
        assert!(is_location("New York, NY"));
        assert!(!is_location("new york"));
    }

    #[test]
    fn test_links_are_classified() {
        let text = "Jane\nDev\ngithub.com/jane | https://janedoe.dev";
        let info = extract_personal(text, text);
        assert_eq!(
            info.links,
            vec![
                Link {
                    link_type: "github".to_string(),
                    url: "https://github.com/jane".to_string()
                },
                Link {
                    link_type: "website".to_string(),
                    url: "https://janedoe.dev".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_header_yields_defaults() {
        let info = extract_personal("", "");
        assert_eq!(info, PersonalInfo::default());
    }
}
