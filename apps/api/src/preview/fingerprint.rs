use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::resume::Resume;
use crate::models::template::Template;

/// Cache key for a `(Resume, Template)` pair: SHA-256 over the canonical JSON
/// serialization of the pair, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(resume: &Resume, template: &Template) -> Result<Self, serde_json::Error> {
        let canonical = serde_json::to_vec(&(resume, template))?;
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        Ok(Self(hex::encode(hasher.finalize())))
    }

    /// Accepts a 64-character lowercase hex string.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = raw.len() == 64
            && raw
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        valid.then(|| Self(raw.to_string()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateCatalog;

    fn template() -> Template {
        TemplateCatalog::builtin().list()[0].clone()
    }

    #[test]
    fn test_fingerprint_is_stable_and_hex() {
        let resume = Resume {
            full_name: "Jane".to_string(),
            ..Resume::default()
        };
        let a = Fingerprint::of(&resume, &template()).unwrap();
        let b = Fingerprint::of(&resume.clone(), &template()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string().len(), 64);
        assert_eq!(Fingerprint::parse(&a.to_string()), Some(a));
    }

    #[test]
    fn test_fingerprint_changes_with_either_input() {
        let resume = Resume::default();
        let base = Fingerprint::of(&resume, &template()).unwrap();

        let edited = Resume {
            summary: "x".to_string(),
            ..Resume::default()
        };
        assert_ne!(base, Fingerprint::of(&edited, &template()).unwrap());

        let mut restyled = template();
        restyled.overrides.colors.primary = Some("#000000".to_string());
        assert_ne!(base, Fingerprint::of(&resume, &restyled).unwrap());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert_eq!(Fingerprint::parse("abc"), None);
        assert_eq!(Fingerprint::parse(&"G".repeat(64)), None);
        assert!(Fingerprint::parse(&"a".repeat(64)).is_some());
    }
}
