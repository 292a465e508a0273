pub mod fuzzy;
pub mod latest;

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex"));

/// Lowercased, NFKC-normalised text with hyphens turned into spaces and
/// punctuation dropped.
#[must_use]
pub fn normalise(text: &str) -> String {
    PUNCTUATION
        .replace_all(&text.replace('-', " ").nfkc().collect::<String>(), "")
        .to_lowercase()
}
