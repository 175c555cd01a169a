use serde::Serialize;
use tracing::debug_span;

use crate::settings::settings;
use crate::text::normalize_whitespace;
use crate::unicode::decompose_presentation_forms;

use super::{Resolution, Token, Transliterator};

/// Per-cluster diagnostic for one input string.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub clusters: Vec<ExplainCluster>,
    /// Identical to `transliterate(input)`.
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainCluster {
    /// Char offset of the consonant in the input, after presentation forms
    /// are decomposed.
    pub offset: usize,
    /// The consonant and its marks as they appear in the input.
    pub source: String,
    pub consonant: String,
    pub vowel: String,
    pub resolution: Resolution,
}

impl ExplainCluster {
    pub fn sound(&self) -> String {
        format!("{}{}", self.consonant, self.vowel)
    }
}

/// Run the transliterator and record which rule decided every cluster.
pub fn explain(input: &str) -> ExplainResult {
    let _span = debug_span!("explain", len = input.len()).entered();
    let chars = decompose_presentation_forms(input);
    let mut raw = String::with_capacity(input.len());
    let mut clusters = Vec::new();

    for token in Transliterator::new(input) {
        token.push_to(&mut raw);
        if let Token::Syllable(s) = token {
            clusters.push(ExplainCluster {
                offset: s.span.start,
                source: chars[s.span.clone()].iter().collect(),
                consonant: s.consonant.to_string(),
                vowel: s.vowel.to_string(),
                resolution: s.resolution,
            });
        }
    }

    ExplainResult {
        input: input.to_string(),
        clusters,
        output: normalize_whitespace(&raw),
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;

    let pad_width = settings().output.explain_column_width;
    let mut out = String::new();

    out.push_str(&format!(
        "=== \"{}\" -> \"{}\" ({} clusters) ===\n",
        result.input,
        result.output,
        result.clusters.len(),
    ));

    for c in &result.clusters {
        // Points are zero-width, so pad by display width rather than chars.
        let display_width = UnicodeWidthStr::width(c.source.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", c.source, " ".repeat(pad_width - display_width))
        } else {
            c.source.clone()
        };
        let sound = if c.consonant.is_empty() && c.vowel.is_empty() {
            "(silent)".to_string()
        } else {
            format!("{}+{}", c.consonant, c.vowel)
        };
        out.push_str(&format!(
            "  @{:<3} {} {:<10} {}\n",
            c.offset,
            padded,
            sound,
            c.resolution.label(),
        ));
    }

    out
}
