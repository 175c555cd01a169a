//! Drill corpus preparation: turn a chaptered source text into a flat list of
//! clean, distinct pointed-Hebrew lines.
//!
//! Network access lives in the CLI; everything here is pure.

mod dedupe;

use serde::Deserialize;
use tracing::info;

use crate::text::normalize_whitespace;
use crate::unicode::strip_cantillation;

pub use dedupe::{dedupe, similarity};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("similarity threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Sefaria text API payload. Only the Hebrew field is read.
#[derive(Debug, Deserialize)]
struct SefariaText {
    he: Vec<Vec<String>>,
}

/// Parse a Sefaria `texts` response into chapters of verses.
pub fn parse_chapters(json: &str) -> Result<Vec<Vec<String>>, CorpusError> {
    let text: SefariaText =
        serde_json::from_str(json).map_err(|e| CorpusError::Parse(format!("Sefaria JSON: {e}")))?;
    Ok(text.he)
}

/// Optionally strip cantillation, then normalize whitespace.
pub fn clean_line(line: &str, strip: bool) -> String {
    if strip {
        normalize_whitespace(&strip_cantillation(line))
    } else {
        normalize_whitespace(line)
    }
}

/// Flatten chapters into verse lines in reading order, cleaning each one and
/// dropping lines left empty.
pub fn flatten_chapters(chapters: &[Vec<String>], strip: bool) -> Vec<String> {
    let verses: Vec<String> = chapters
        .iter()
        .flatten()
        .map(|verse| clean_line(verse, strip))
        .filter(|verse| !verse.is_empty())
        .collect();
    info!(
        chapters = chapters.len(),
        verses = verses.len(),
        "flattened corpus"
    );
    verses
}
