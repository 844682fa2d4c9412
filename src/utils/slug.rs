use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Derive a URL-safe slug from a title or category name.
///
/// Lowercases the input, drops everything outside `[a-z0-9]`, whitespace and
/// `-`, turns each whitespace run into one hyphen and trims hyphens from both
/// ends. Accented letters are dropped rather than transliterated.
pub fn create_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&cleaned, "-");
    hyphenated.trim_matches('-').to_string()
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
