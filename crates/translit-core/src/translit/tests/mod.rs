mod basic;

/// Concatenate letters and marks into one string. Keeps mark order explicit,
/// which literal pointed Hebrew in source does not.
pub(super) fn heb(parts: &[char]) -> String {
    parts.iter().collect()
}
