use serde::Serialize;

use crate::unicode::*;

/// A vowel point. Shva is not a vowel point; it is resolved separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vowel {
    Patach,
    Kamatz,
    /// Explicit kamatz katan point (U+05C7); pronounced like kamatz.
    KamatzKatan,
    Tsere,
    Segol,
    Hiriq,
    Holam,
    HolamHaserForVav,
    Qibbuts,
    HatafSegol,
    HatafPatach,
    HatafKamatz,
}

impl Vowel {
    pub fn from_point(c: char) -> Option<Self> {
        let v = match c {
            PATACH => Self::Patach,
            KAMATZ => Self::Kamatz,
            KAMATZ_KATAN => Self::KamatzKatan,
            TSERE => Self::Tsere,
            SEGOL => Self::Segol,
            HIRIQ => Self::Hiriq,
            HOLAM => Self::Holam,
            HOLAM_HASER_FOR_VAV => Self::HolamHaserForVav,
            QIBBUTS => Self::Qibbuts,
            HATAF_SEGOL => Self::HatafSegol,
            HATAF_PATACH => Self::HatafPatach,
            HATAF_KAMATZ => Self::HatafKamatz,
            _ => return None,
        };
        Some(v)
    }

    pub fn sound(self) -> &'static str {
        match self {
            Self::Patach | Self::Kamatz | Self::KamatzKatan => "a",
            Self::HatafPatach | Self::HatafKamatz => "a",
            Self::Tsere | Self::Segol | Self::HatafSegol => "e",
            Self::Hiriq => "i",
            Self::Holam | Self::HolamHaserForVav => "o",
            Self::Qibbuts => "u",
        }
    }

    /// Kamatz, tsere and both holam forms. Everything else is short.
    pub fn is_long(self) -> bool {
        matches!(
            self,
            Self::Kamatz | Self::KamatzKatan | Self::Tsere | Self::Holam | Self::HolamHaserForVav
        )
    }

    pub fn is_holam(self) -> bool {
        matches!(self, Self::Holam | Self::HolamHaserForVav)
    }
}

/// Base sound of a letter, after dagesh hardening and the shin/sin dot.
///
/// Only bet, kaf and pe harden. Dagesh on any other letter is ignored
/// (gemination is not modelled).
pub fn consonant_sound(letter: char, dagesh: bool, sin_dot: bool) -> &'static str {
    match letter {
        BET if dagesh => "b",
        KAF | FINAL_KAF if dagesh => "k",
        PE | FINAL_PE if dagesh => "p",
        SHIN if sin_dot => "s",
        ALEF | AYIN => "",
        BET | VAV => "v",
        'ג' => "g",
        'ד' => "d",
        HE => "h",
        'ז' => "z",
        'ח' | KAF | FINAL_KAF => "ch",
        'ט' | 'ת' => "t",
        YOD => "y",
        'ל' => "l",
        'ם' | 'מ' => "m",
        'ן' | 'נ' => "n",
        'ס' => "s",
        PE | FINAL_PE => "f",
        'ץ' | 'צ' => "ts",
        'ק' => "k",
        'ר' => "r",
        SHIN => "sh",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_has_a_sound_except_the_silent_ones() {
        for c in LETTERS {
            let sound = consonant_sound(c, false, false);
            if c == ALEF || c == AYIN {
                assert_eq!(sound, "", "{c} should be silent");
            } else {
                assert!(!sound.is_empty(), "{c} has no sound");
            }
        }
    }

    #[test]
    fn dagesh_hardens_only_begedkefet_subset() {
        assert_eq!(consonant_sound(BET, true, false), "b");
        assert_eq!(consonant_sound(KAF, true, false), "k");
        assert_eq!(consonant_sound(FINAL_KAF, true, false), "k");
        assert_eq!(consonant_sound(PE, true, false), "p");
        assert_eq!(consonant_sound(FINAL_PE, true, false), "p");
        assert_eq!(consonant_sound('ת', true, false), "t");
        assert_eq!(consonant_sound('ק', true, false), "k");
        assert_eq!(consonant_sound('ג', true, false), "g");
        assert_eq!(consonant_sound('ל', true, false), "l");
    }

    #[test]
    fn shin_and_sin() {
        assert_eq!(consonant_sound(SHIN, false, false), "sh");
        assert_eq!(consonant_sound(SHIN, false, true), "s");
        assert_eq!(consonant_sound(SHIN, true, true), "s");
    }

    #[test]
    fn vowel_lengths() {
        let long: Vec<Vowel> = [
            PATACH, KAMATZ, TSERE, SEGOL, HIRIQ, HOLAM, QIBBUTS, HATAF_SEGOL,
        ]
        .into_iter()
        .filter_map(Vowel::from_point)
        .filter(|v| v.is_long())
        .collect();
        assert_eq!(long, vec![Vowel::Kamatz, Vowel::Tsere, Vowel::Holam]);
    }

    #[test]
    fn hataf_vowels_take_plain_quality() {
        assert_eq!(Vowel::HatafSegol.sound(), "e");
        assert_eq!(Vowel::HatafPatach.sound(), "a");
        assert_eq!(Vowel::HatafKamatz.sound(), "a");
        assert!(!Vowel::HatafKamatz.is_long());
    }

    #[test]
    fn shva_and_dagesh_are_not_vowels() {
        assert_eq!(Vowel::from_point(SHVA), None);
        assert_eq!(Vowel::from_point(DAGESH), None);
        assert_eq!(Vowel::from_point('a'), None);
    }
}
