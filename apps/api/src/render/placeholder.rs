//! `{{dotted.path}}` substitution against a JSON view of the template data.
//!
//! Lookup walks objects by key and arrays by numeric index. Strings, numbers
//! and booleans are substituted as text, arrays of scalars are joined with
//! `", "`, anything else (objects, null, missing paths) becomes the empty
//! string. Substitution never fails.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::render::theme::escape_html;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}").unwrap());

/// Resolves a dotted path, e.g. `content.experience.0.company`.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Text form of a resolved value.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => scalar_text(other).unwrap_or_default(),
    }
}

/// Replaces every token in `text`. With `escape` set, substituted values are
/// HTML-escaped; the surrounding template text is left untouched.
pub fn substitute(text: &str, context: &Value, escape: bool) -> String {
    TOKEN_RE
        .replace_all(text, |caps: &Captures| {
            let resolved = lookup(context, &caps[1]).map(value_text).unwrap_or_default();
            if escape {
                escape_html(&resolved)
            } else {
                resolved
            }
        })
        .into_owned()
}
