use translit_core::translit::explain::{ExplainCluster, ExplainResult};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TranslitError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, uniffi::Record)]
pub struct TranslitCluster {
    pub offset: u64,
    pub source: String,
    pub consonant: String,
    pub vowel: String,
    pub rule: String,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct TranslitExplain {
    pub output: String,
    pub clusters: Vec<TranslitCluster>,
}

impl From<&ExplainCluster> for TranslitCluster {
    fn from(c: &ExplainCluster) -> Self {
        Self {
            offset: u64::try_from(c.offset).unwrap_or(u64::MAX),
            source: c.source.clone(),
            consonant: c.consonant.clone(),
            vowel: c.vowel.clone(),
            rule: c.resolution.label(),
        }
    }
}

impl From<ExplainResult> for TranslitExplain {
    fn from(r: ExplainResult) -> Self {
        Self {
            clusters: r.clusters.iter().map(TranslitCluster::from).collect(),
            output: r.output,
        }
    }
}
