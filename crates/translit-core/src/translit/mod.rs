//! Pointed Hebrew to Latin transliteration (Modern Israeli pronunciation).
//!
//! A single left-to-right pass over code points. Each consonant and the marks
//! that follow it form a [`Cluster`]; clusters are resolved to a consonant
//! sound plus a vowel sound using per-word state (previous vowel, its length,
//! and whether the previous shva was silent). Whitespace resets that state.

mod cluster;
pub mod explain;
mod shva;
mod table;

#[cfg(test)]
mod tests;

use std::ops::Range;

use serde::Serialize;
use tracing::debug_span;

use crate::text::normalize_whitespace;
use crate::unicode::{
    classify, decompose_presentation_forms, punctuation_ascii, CharClass, HE, MAQAF, VAV, YOD,
};

pub use cluster::{Cluster, Marks};
pub use shva::ShvaRule;
pub use table::{consonant_sound, Vowel};

use shva::ShvaContext;

/// How a cluster's sound was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Consonant plus its vowel point.
    Vowel(Vowel),
    /// Consonant with neither vowel point nor shva.
    Bare,
    /// Consonant plus a shva, voiced or silent by the given rule.
    Shva(ShvaRule),
    /// Word-final he without dagesh or vowel: not pronounced.
    SilentFinalHe,
    /// Vav with dagesh and no vowel point: "u".
    Shuruq,
    /// Vav with holam: "o".
    HolamMale,
    /// Bare yod after an "i" or "e": absorbed into that vowel.
    SilentYod,
}

impl Resolution {
    pub fn label(&self) -> String {
        match self {
            Self::Vowel(v) => format!("vowel:{v:?}"),
            Self::Bare => "bare".to_string(),
            Self::Shva(rule) => {
                let kind = if rule.is_voiced() { "na" } else { "nach" };
                format!("shva-{kind}:{rule:?}")
            }
            Self::SilentFinalHe => "silent-final-he".to_string(),
            Self::Shuruq => "shuruq".to_string(),
            Self::HolamMale => "holam-male".to_string(),
            Self::SilentYod => "silent-yod".to_string(),
        }
    }
}

/// The sound produced by one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub letter: char,
    pub consonant: &'static str,
    pub vowel: &'static str,
    pub resolution: Resolution,
    /// Char offsets of the cluster in the input.
    pub span: Range<usize>,
}

impl Syllable {
    fn new(
        cluster: &Cluster,
        consonant: &'static str,
        vowel: &'static str,
        resolution: Resolution,
    ) -> Self {
        Self {
            letter: cluster.letter,
            consonant,
            vowel,
            resolution,
            span: cluster.span.clone(),
        }
    }

    fn silent(cluster: &Cluster, resolution: Resolution) -> Self {
        Self::new(cluster, "", "", resolution)
    }
}

/// Output of the lazy transliteration stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Syllable(Syllable),
    /// A character passed through (or Hebrew punctuation mapped to ASCII).
    Char(char),
}

impl Token {
    pub fn push_to(&self, out: &mut String) {
        match self {
            Self::Syllable(s) => {
                out.push_str(s.consonant);
                out.push_str(s.vowel);
            }
            Self::Char(c) => out.push(*c),
        }
    }
}

/// Per-word state, reset at every word boundary.
#[derive(Debug, Clone, Copy, Default)]
struct WordState {
    previous_vowel: Option<&'static str>,
    previous_vowel_long: bool,
    previous_shva_silent: bool,
    /// Vowel emitted by the immediately preceding cluster, if any.
    last_cluster_vowel: Option<&'static str>,
}

impl WordState {
    fn shva_context(&self) -> ShvaContext {
        ShvaContext {
            previous_vowel: self.previous_vowel,
            previous_vowel_long: self.previous_vowel_long,
            previous_shva_silent: self.previous_shva_silent,
        }
    }

    fn advance(&mut self, syllable: &Syllable) {
        let long = match syllable.resolution {
            Resolution::Vowel(v) => v.is_long(),
            Resolution::Shuruq | Resolution::HolamMale => true,
            _ => false,
        };
        self.previous_shva_silent =
            matches!(syllable.resolution, Resolution::Shva(rule) if !rule.is_voiced());
        if syllable.vowel.is_empty() {
            self.last_cluster_vowel = None;
        } else {
            self.previous_vowel = Some(syllable.vowel);
            self.previous_vowel_long = long;
            self.last_cluster_vowel = Some(syllable.vowel);
        }
    }
}

/// Resolve one cluster. `next` is the cluster directly after it in the same
/// word, if any.
fn resolve(cluster: &Cluster, next: Option<&Cluster>, state: &WordState) -> Syllable {
    let m = &cluster.marks;

    // Matres lectionis, in priority order.
    if cluster.letter == HE && !m.dagesh && m.vowel.is_none() && next.is_none() {
        return Syllable::silent(cluster, Resolution::SilentFinalHe);
    }
    if cluster.letter == VAV && m.dagesh && m.vowel.is_none() {
        return Syllable::new(cluster, "", "u", Resolution::Shuruq);
    }
    if cluster.letter == VAV && m.vowel.is_some_and(Vowel::is_holam) {
        return Syllable::new(cluster, "", "o", Resolution::HolamMale);
    }
    if cluster.letter == YOD
        && m.vowel.is_none()
        && !m.dagesh
        && matches!(state.last_cluster_vowel, Some("i" | "e"))
    {
        return Syllable::silent(cluster, Resolution::SilentYod);
    }

    let consonant = consonant_sound(cluster.letter, m.dagesh, m.sin_dot);
    match m.vowel {
        Some(v) => Syllable::new(cluster, consonant, v.sound(), Resolution::Vowel(v)),
        None if m.shva => {
            let rule = shva::resolve(cluster, next, state.shva_context());
            Syllable::new(cluster, consonant, rule.sound(), Resolution::Shva(rule))
        }
        None => Syllable::new(cluster, consonant, "", Resolution::Bare),
    }
}

/// Lazy transliteration over `input`, one [`Token`] per cluster or
/// passed-through character. Orphaned marks and unmapped Hebrew punctuation
/// produce no token.
///
/// The raw stream is not whitespace-normalized; [`transliterate`] does that.
pub struct Transliterator {
    chars: Vec<char>,
    pos: usize,
    state: WordState,
}

impl Transliterator {
    pub fn new(input: &str) -> Self {
        Self {
            chars: decompose_presentation_forms(input),
            pos: 0,
            state: WordState::default(),
        }
    }
}

impl Iterator for Transliterator {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let c = *self.chars.get(self.pos)?;
            match classify(c) {
                CharClass::Consonant => {
                    let cluster = Cluster::collect(&self.chars, self.pos);
                    let next = cluster.following(&self.chars);
                    let syllable = resolve(&cluster, next.as_ref(), &self.state);
                    self.state.advance(&syllable);
                    self.pos = cluster.span.end;
                    return Some(Token::Syllable(syllable));
                }
                CharClass::Mark => {
                    // orphaned
                    self.pos += 1;
                }
                CharClass::Punctuation => {
                    self.pos += 1;
                    if c == MAQAF {
                        self.state = WordState::default();
                    }
                    if let Some(ascii) = punctuation_ascii(c) {
                        return Some(Token::Char(ascii));
                    }
                }
                CharClass::Other => {
                    self.pos += 1;
                    if c.is_whitespace() {
                        self.state = WordState::default();
                    }
                    let out = if c == '\n' { ' ' } else { c };
                    return Some(Token::Char(out));
                }
            }
        }
    }
}

/// Transliterate pointed Hebrew to Latin. Non-Hebrew text passes through;
/// whitespace runs collapse to one space and the ends are trimmed.
pub fn transliterate(input: &str) -> String {
    let _span = debug_span!("transliterate", len = input.len()).entered();
    let mut raw = String::with_capacity(input.len());
    for token in Transliterator::new(input) {
        token.push_to(&mut raw);
    }
    normalize_whitespace(&raw)
}
