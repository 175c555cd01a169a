use std::ops::Range;

use super::table::Vowel;
use crate::unicode::{is_consonant, is_mark, DAGESH, SHIN_DOT, SHVA, SIN_DOT};

/// The marks attached to one consonant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marks {
    pub dagesh: bool,
    pub shin_dot: bool,
    pub sin_dot: bool,
    pub shva: bool,
    /// First vowel point seen; later ones on the same letter are ignored.
    pub vowel: Option<Vowel>,
}

/// A base consonant plus every combining mark that immediately follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub letter: char,
    pub marks: Marks,
    /// Char offsets into the input, end exclusive.
    pub span: Range<usize>,
}

impl Cluster {
    /// Scan forward from the consonant at `start` while code points are marks.
    ///
    /// Cantillation, meteg and rafe are consumed but not recorded.
    pub fn collect(chars: &[char], start: usize) -> Self {
        debug_assert!(is_consonant(chars[start]));
        let mut marks = Marks::default();
        let mut end = start + 1;
        while let Some(&c) = chars.get(end) {
            if !is_mark(c) {
                break;
            }
            match c {
                DAGESH => marks.dagesh = true,
                SHIN_DOT => marks.shin_dot = true,
                SIN_DOT => marks.sin_dot = true,
                SHVA => marks.shva = true,
                _ => {
                    if marks.vowel.is_none() {
                        marks.vowel = Vowel::from_point(c);
                    }
                }
            }
            end += 1;
        }
        Self {
            letter: chars[start],
            marks,
            span: start..end,
        }
    }

    /// The cluster starting right after this one, if a consonant follows
    /// directly. `None` means this cluster ends its word.
    pub fn following(&self, chars: &[char]) -> Option<Self> {
        match chars.get(self.span.end) {
            Some(&c) if is_consonant(c) => Some(Self::collect(chars, self.span.end)),
            _ => None,
        }
    }
}
