//! Shva na / shva nach resolution.
//!
//! The guards run in a fixed order and the first match wins. Reordering them
//! changes output: rules `AfterSilentShva` and `BeforeShva` together make the
//! first of two consecutive shvas silent and the second voiced.

use serde::Serialize;
use tracing::debug;

use super::cluster::Cluster;

/// The rule that decided a shva.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShvaRule {
    /// No consonant follows in this word: silent.
    EndOfWord,
    /// The previous letter's shva was silent: voiced.
    AfterSilentShva,
    /// The next letter also carries a shva: silent.
    BeforeShva,
    /// First letter of the word: voiced.
    WordInitial,
    /// Previous vowel was long: voiced.
    AfterLongVowel,
    /// Previous vowel was short: silent.
    AfterShortVowel,
}

impl ShvaRule {
    pub fn is_voiced(self) -> bool {
        matches!(
            self,
            Self::AfterSilentShva | Self::WordInitial | Self::AfterLongVowel
        )
    }

    pub fn sound(self) -> &'static str {
        if self.is_voiced() {
            "e"
        } else {
            ""
        }
    }
}

/// What the shva decision needs to know about the word so far.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShvaContext {
    pub previous_vowel: Option<&'static str>,
    pub previous_vowel_long: bool,
    pub previous_shva_silent: bool,
}

pub(crate) fn resolve(cluster: &Cluster, next: Option<&Cluster>, ctx: ShvaContext) -> ShvaRule {
    let rule = match next {
        None => ShvaRule::EndOfWord,
        Some(_) if ctx.previous_shva_silent => ShvaRule::AfterSilentShva,
        Some(n) if n.marks.shva => ShvaRule::BeforeShva,
        Some(_) if ctx.previous_vowel.is_none() => ShvaRule::WordInitial,
        Some(_) if ctx.previous_vowel_long => ShvaRule::AfterLongVowel,
        Some(_) => ShvaRule::AfterShortVowel,
    };
    debug!(letter = %cluster.letter, ?rule, voiced = rule.is_voiced(), "shva");
    rule
}
