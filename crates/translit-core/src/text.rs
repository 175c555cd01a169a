//! Whitespace and display helpers shared by the transliterator and the corpus tools.

/// Trim both ends and collapse every whitespace run to a single space.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a transliteration is worth showing: something remains after
/// removing apostrophes and whitespace.
pub fn has_visible_output(s: &str) -> bool {
    s.chars().any(|c| c != '\'' && !c.is_whitespace())
}
