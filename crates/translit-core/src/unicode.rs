//! Character-level Unicode classification for the Hebrew block (U+0590..U+05FF).

use std::ops::RangeInclusive;

/// Cantillation accents (te'amim). Consumed inside a cluster, never pronounced.
pub const CANTILLATION: RangeInclusive<char> = '\u{0591}'..='\u{05AF}';

/// Vowel points and other combining marks, including the punctuation that
/// Unicode interleaves with them (maqaf, paseq, sof pasuq, nun hafukha).
pub const POINTS: RangeInclusive<char> = '\u{05B0}'..='\u{05C7}';

/// The 27 letter forms, alef through tav, including the five final forms.
pub const LETTERS: RangeInclusive<char> = '\u{05D0}'..='\u{05EA}';

/// Alphabetic presentation forms: precomposed letters with points.
pub const PRESENTATION_FORMS: RangeInclusive<char> = '\u{FB1D}'..='\u{FB4F}';

// Points
pub const SHVA: char = '\u{05B0}';
pub const HATAF_SEGOL: char = '\u{05B1}';
pub const HATAF_PATACH: char = '\u{05B2}';
pub const HATAF_KAMATZ: char = '\u{05B3}';
pub const HIRIQ: char = '\u{05B4}';
pub const TSERE: char = '\u{05B5}';
pub const SEGOL: char = '\u{05B6}';
pub const PATACH: char = '\u{05B7}';
pub const KAMATZ: char = '\u{05B8}';
pub const HOLAM: char = '\u{05B9}';
pub const HOLAM_HASER_FOR_VAV: char = '\u{05BA}';
pub const QIBBUTS: char = '\u{05BB}';
pub const DAGESH: char = '\u{05BC}';
pub const METEG: char = '\u{05BD}';
pub const RAFE: char = '\u{05BF}';
pub const SHIN_DOT: char = '\u{05C1}';
pub const SIN_DOT: char = '\u{05C2}';
pub const UPPER_DOT: char = '\u{05C4}';
pub const LOWER_DOT: char = '\u{05C5}';
pub const KAMATZ_KATAN: char = '\u{05C7}';

// Punctuation
pub const MAQAF: char = '\u{05BE}';
pub const PASEQ: char = '\u{05C0}';
pub const SOF_PASUQ: char = '\u{05C3}';
pub const NUN_HAFUKHA: char = '\u{05C6}';
pub const GERESH: char = '\u{05F3}';
pub const GERSHAYIM: char = '\u{05F4}';

// Letters the rules single out
pub const ALEF: char = 'א';
pub const BET: char = 'ב';
pub const HE: char = 'ה';
pub const VAV: char = 'ו';
pub const YOD: char = 'י';
pub const FINAL_KAF: char = 'ך';
pub const KAF: char = 'כ';
pub const AYIN: char = 'ע';
pub const FINAL_PE: char = 'ף';
pub const PE: char = 'פ';
pub const SHIN: char = 'ש';

/// How the transliterator treats a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A base letter; starts a cluster.
    Consonant,
    /// A combining mark. Outside a cluster it is orphaned and dropped.
    Mark,
    /// Hebrew punctuation with an ASCII rendering (or none).
    Punctuation,
    /// Everything else, passed through as-is.
    Other,
}

/// Replace presentation forms by their canonical decomposition, a base letter
/// followed by its points. Forms with only a compatibility mapping (wide
/// letters, the alef-lamed ligature) and all other chars are kept as-is.
pub fn decompose_presentation_forms(input: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(input.len());
    for c in input.chars() {
        if PRESENTATION_FORMS.contains(&c) {
            unicode_normalization::char::decompose_canonical(c, |d| out.push(d));
        } else {
            out.push(c);
        }
    }
    out
}

pub fn classify(c: char) -> CharClass {
    if is_consonant(c) {
        CharClass::Consonant
    } else if is_hebrew_punctuation(c) {
        CharClass::Punctuation
    } else if is_mark(c) {
        CharClass::Mark
    } else {
        CharClass::Other
    }
}

pub fn is_consonant(c: char) -> bool {
    LETTERS.contains(&c)
}

/// Combining marks that attach to the preceding consonant.
pub fn is_mark(c: char) -> bool {
    (CANTILLATION.contains(&c) || POINTS.contains(&c)) && !is_hebrew_punctuation(c)
}

pub fn is_hebrew_punctuation(c: char) -> bool {
    matches!(
        c,
        MAQAF | PASEQ | SOF_PASUQ | NUN_HAFUKHA | GERESH | GERSHAYIM
    )
}

/// ASCII rendering of Hebrew punctuation. `None` means the mark is dropped.
pub fn punctuation_ascii(c: char) -> Option<char> {
    match c {
        MAQAF => Some('-'),
        SOF_PASUQ => Some('.'),
        GERESH => Some('\''),
        GERSHAYIM => Some('"'),
        _ => None,
    }
}

/// A vowel point or shva, i.e. something that makes text "pointed".
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{05B0}'..='\u{05BB}').contains(&c) || c == KAMATZ_KATAN
}

/// Marks removed by [`strip_cantillation`]: the accents plus meteg, rafe,
/// paseq and the upper/lower dots. Niqqud is kept.
fn is_reading_aid(c: char) -> bool {
    CANTILLATION.contains(&c) || matches!(c, METEG | RAFE | PASEQ | UPPER_DOT | LOWER_DOT)
}

/// Remove cantillation and reading aids, keeping consonants and niqqud.
pub fn strip_cantillation(s: &str) -> String {
    s.chars().filter(|&c| !is_reading_aid(c)).collect()
}

/// True when `s` has at least one consonant and at least one vowel sign.
pub fn is_pointed_hebrew(s: &str) -> bool {
    s.chars().any(is_consonant) && s.chars().any(is_vowel_sign)
}
