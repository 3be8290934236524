//! Allow-list HTML sanitizer for note content.
//!
//! Note bodies are rendered as trusted HTML by the front end, so everything
//! outside the allow-list is stripped before it reaches storage.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

/// Tags that survive sanitization.
pub const ALLOWED_TAGS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "b",
    "strong",
    "i",
    "em",
    "u",
    "s",
    "strike",
    "del",
    "ul",
    "ol",
    "li",
    "blockquote",
    "pre",
    "br",
    "a",
];

/// Strip every tag and attribute outside the allow-list.
///
/// Anchors keep only `href`, and only with a safe URL scheme. `script` and
/// `style` elements are removed together with their text.
pub fn sanitize_html(input: &str) -> String {
    Builder::default()
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::from([("a", HashSet::from(["href"]))]))
        .link_rel(None)
        .clean(input)
        .to_string()
}
