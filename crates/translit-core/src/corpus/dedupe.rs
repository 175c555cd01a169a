use similar::{capture_diff_slices, Algorithm, DiffOp};
use tracing::{debug, info};

use super::CorpusError;

/// Similarity of two lines in [0, 1]: `2 * M / T`, where `M` is the number of
/// chars in matching runs and `T` the total length of both lines.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = capture_diff_slices(Algorithm::Myers, &a, &b)
        .iter()
        .map(|op| match op {
            DiffOp::Equal { len, .. } => *len,
            _ => 0,
        })
        .sum();
    (2 * matched) as f64 / total as f64
}

/// Drop exact and near duplicates. A line is kept only if its similarity to
/// every line kept so far is below `threshold`; the first occurrence wins.
pub fn dedupe(lines: Vec<String>, threshold: f64) -> Result<Vec<String>, CorpusError> {
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(CorpusError::InvalidThreshold(threshold));
    }

    let total = lines.len();
    let mut unique: Vec<String> = Vec::with_capacity(total);
    for line in lines {
        let duplicate_of = unique
            .iter()
            .position(|kept| similarity(&line, kept) >= threshold);
        match duplicate_of {
            Some(idx) => debug!(kept = idx, "dropping near-duplicate line"),
            None => unique.push(line),
        }
    }

    info!(before = total, after = unique.len(), threshold, "deduplicated");
    Ok(unique)
}
