//! Downloading source texts for the drill corpus.

use tracing::info;

use translit_core::corpus::{parse_chapters, CorpusError};

#[derive(Debug, thiserror::Error)]
pub enum CorpusSourceError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(#[from] CorpusError),
}

/// GET `url` and return the body as text.
pub fn fetch_text(url: &str) -> Result<String, CorpusSourceError> {
    info!(url, "downloading source text");
    ureq::get(url)
        .call()
        .map_err(|e| CorpusSourceError::Http(format!("{url}: {e}")))?
        .into_body()
        .read_to_string()
        .map_err(|e| CorpusSourceError::Http(format!("{url}: {e}")))
}

/// Download a Sefaria text and return its Hebrew chapters.
pub fn fetch_chapters(url: &str) -> Result<Vec<Vec<String>>, CorpusSourceError> {
    let body = fetch_text(url)?;
    Ok(parse_chapters(&body)?)
}
