//! CSRF token extraction.
//!
//! Tickspot's login page carries the session token in a
//! `<meta name="csrf-token" content="...">` tag. That page layout is an
//! external contract that can change under us, so everything that knows
//! about it lives behind this one function.

use std::sync::LazyLock;

use regex::Regex;

static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("Could not parse Regex"));

static CSRF_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bname\s*=\s*["']?csrf-token["']?"#).expect("Could not parse Regex")
});

static CONTENT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Could not parse Regex")
});

/// Find the csrf-token meta tag and return its content attribute.
///
/// Attribute order, quoting style and case are not fixed across page
/// revisions, so each meta tag is scanned attribute by attribute instead of
/// with one brittle full-tag pattern.
pub(crate) fn extract_csrf(html: &str) -> Option<String> {
    META_TAG
        .find_iter(html)
        .map(|m| m.as_str())
        .filter(|tag| CSRF_NAME.is_match(tag))
        .find_map(|tag| {
            let caps = CONTENT_ATTR.captures(tag)?;
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
        })
}
