//! Section splitter: partitions raw résumé text into labeled buckets by heading line.
//!
//! A heading is a line whose trimmed content, minus an optional trailing colon,
//! equals one word of the vocabulary (case-insensitive). Everything before the
//! first heading lands in `header`. A repeated heading overwrites the earlier
//! bucket: the last occurrence wins, the two are never merged.

use std::collections::BTreeMap;

use crate::models::site::ProfileType;

/// Bucket name for text preceding the first heading.
pub const HEADER: &str = "header";

/// Section name → raw (trimmed) section text. Always contains [`HEADER`].
pub type SectionMap = BTreeMap<String, String>;

const STANDARD_HEADINGS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "recognitions",
    "languages",
    "awards",
    "certifications",
];

const CREATIVE_HEADINGS: &[&str] = &[
    "portfolio",
    "works",
    "exhibitions",
    "performances",
    "statement",
    "press",
    "representation",
];

/// The recognized heading words, stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingVocabulary {
    words: Vec<String>,
}

impl HeadingVocabulary {
    pub fn standard() -> Self {
        Self {
            words: STANDARD_HEADINGS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Standard vocabulary plus the artist/musician headings.
    pub fn creative() -> Self {
        Self::standard().with_headings(CREATIVE_HEADINGS.iter().copied())
    }

    pub fn for_profile(profile: ProfileType) -> Self {
        if profile.is_creative() {
            Self::creative()
        } else {
            Self::standard()
        }
    }

    pub fn with_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for heading in headings {
            let word = heading.as_ref().trim().to_lowercase();
            if !word.is_empty() && word != HEADER && !self.contains(&word) {
                self.words.push(word);
            }
        }
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Returns the lowercased section name if `line` is a heading line.
    pub fn match_heading(&self, line: &str) -> Option<&str> {
        let candidate = line.trim();
        let candidate = candidate.strip_suffix(':').unwrap_or(candidate).trim_end();
        if candidate.is_empty() {
            return None;
        }
        self.words
            .iter()
            .find(|w| w.eq_ignore_ascii_case(candidate))
            .map(String::as_str)
    }
}

impl Default for HeadingVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Splits `text` into sections. Never fails: text without any recognized
/// heading yields a map holding only `header` with the whole (trimmed) input.
pub fn split_sections(text: &str, vocabulary: &HeadingVocabulary) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current = HEADER.to_string();
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(heading) = vocabulary.match_heading(line) {
            sections.insert(current, buffer.join("\n").trim().to_string());
            current = heading.to_string();
            buffer.clear();
        } else {
            buffer.push(line.trim_end());
        }
    }
    sections.insert(current, buffer.join("\n").trim().to_string());

    sections
}

/// Returns the named section or an empty string.
pub fn section<'a>(sections: &'a SectionMap, name: &str) -> &'a str {
    sections.get(name).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_heading_yields_only_header() {
        let sections = split_sections("Jane Doe\nEngineer\n", &HeadingVocabulary::standard());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[HEADER], "Jane Doe\nEngineer");
    }

    #[test]
    fn test_empty_input_still_has_header() {
        let sections = split_sections("", &HeadingVocabulary::standard());
        assert_eq!(sections.get(HEADER).map(String::as_str), Some(""));
    }

    #[test]
    fn test_headings_are_case_insensitive_with_optional_colon() {
        let text = "Jane\nSummary:\nHello.\n\nskills\nRust, Go\n\nEXPERIENCE :\nDev";
        let sections = split_sections(text, &HeadingVocabulary::standard());
        assert_eq!(sections["summary"], "Hello.");
        assert_eq!(sections["skills"], "Rust, Go");
        assert_eq!(sections["experience"], "Dev");
    }

    #[test]
    fn test_end_to_end_sample_splits() {
        let text = "Jane Doe\nSoftware Engineer\nSUMMARY:\nBuilds things.\nEXPERIENCE:\nSenior Dev\nAcme Corp\n2020-Present\nShipped features.";
        let sections = split_sections(text, &HeadingVocabulary::standard());
        assert_eq!(sections[HEADER], "Jane Doe\nSoftware Engineer");
        assert_eq!(sections["summary"], "Builds things.");
        assert_eq!(
            sections["experience"],
            "Senior Dev\nAcme Corp\n2020-Present\nShipped features."
        );
    }

    #[test]
    fn test_repeated_heading_last_write_wins() {
        let text = "Jane\nSKILLS\nRust\nEDUCATION\nBSc\nSKILLS\nGo";
        let sections = split_sections(text, &HeadingVocabulary::standard());
        assert_eq!(sections["skills"], "Go");
        assert_eq!(sections["education"], "BSc");
    }

    #[test]
    fn test_all_keys_are_header_or_vocabulary() {
        let vocabulary = HeadingVocabulary::creative();
        let text = "A\nPORTFOLIO\nx\nRandom Heading\ny\nPRESS:\nz\nAWARDS\nw";
        let sections = split_sections(text, &vocabulary);
        for key in sections.keys() {
            assert!(key == HEADER || vocabulary.contains(key), "unexpected key {key}");
            assert_eq!(key, &key.to_lowercase());
        }
        assert_eq!(sections["portfolio"], "x\nRandom Heading\ny");
    }

    #[test]
    fn test_creative_headings_ignored_by_standard_vocabulary() {
        let text = "A\nPORTFOLIO\nx";
        let sections = split_sections(text, &HeadingVocabulary::standard());
        assert_eq!(sections.len(), 1);
        assert!(sections[HEADER].contains("PORTFOLIO"));
    }

    #[test]
    fn test_heading_inside_sentence_is_not_a_heading() {
        let text = "A\nMy experience includes Rust";
        let sections = split_sections(text, &HeadingVocabulary::standard());
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_vocabulary_extension() {
        let vocabulary = HeadingVocabulary::standard().with_headings(["Volunteering", "header"]);
        assert!(vocabulary.contains("volunteering"));
        assert!(!vocabulary.contains(HEADER));
        let sections = split_sections("A\nVOLUNTEERING\nFood bank", &vocabulary);
        assert_eq!(sections["volunteering"], "Food bank");
    }

    #[test]
    fn test_for_profile_selects_creative_vocabulary() {
        assert!(HeadingVocabulary::for_profile(ProfileType::Musician).contains("performances"));
        assert!(!HeadingVocabulary::for_profile(ProfileType::Developer).contains("performances"));
    }
}
