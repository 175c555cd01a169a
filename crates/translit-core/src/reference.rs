//! Pronunciation guide: the reference letters and vowels shown beside the
//! drills, each paired with what the transliterator makes of its example.

use serde::Serialize;

use crate::translit::transliterate;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConsonantRef {
    /// Letter form(s), with dagesh where it changes the sound.
    pub glyph: &'static str,
    pub name: &'static str,
    pub sound: &'static str,
    pub example: &'static str,
    /// Conventional reading of `example`.
    pub reading: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VowelRef {
    /// The vowel under bet.
    pub sample: &'static str,
    pub name: &'static str,
    pub sound: &'static str,
    pub example: &'static str,
    /// English word with the same vowel.
    pub hint: &'static str,
}

pub const CONSONANTS: &[ConsonantRef] = &[
    ConsonantRef {
        glyph: "א",
        name: "Alef",
        sound: "Silent / glottal stop",
        example: "אָב",
        reading: "av",
    },
    ConsonantRef {
        glyph: "בּ",
        name: "Bet",
        sound: "b (as in boy)",
        example: "בַּיִת",
        reading: "bayit",
    },
    ConsonantRef {
        glyph: "ב",
        name: "Vet",
        sound: "v (as in vine)",
        example: "כָּתַב",
        reading: "katav",
    },
    ConsonantRef {
        glyph: "גּ",
        name: "Gimel",
        sound: "g (as in go)",
        example: "גַּן",
        reading: "gan",
    },
    ConsonantRef {
        glyph: "דּ",
        name: "Dalet",
        sound: "d (as in dog)",
        example: "דֶּלֶת",
        reading: "delet",
    },
    ConsonantRef {
        glyph: "ה",
        name: "He",
        sound: "h (as in hat)",
        example: "הַר",
        reading: "har",
    },
    ConsonantRef {
        glyph: "ו",
        name: "Vav",
        sound: "v (as in vine)",
        example: "וָרֹד",
        reading: "varod",
    },
    ConsonantRef {
        glyph: "ז",
        name: "Zayin",
        sound: "z (as in zoo)",
        example: "זְמַן",
        reading: "zman",
    },
    ConsonantRef {
        glyph: "ח",
        name: "Chet",
        sound: "ch (guttural)",
        example: "חַם",
        reading: "cham",
    },
    ConsonantRef {
        glyph: "ט",
        name: "Tet",
        sound: "t (as in top)",
        example: "טוֹב",
        reading: "tov",
    },
    ConsonantRef {
        glyph: "י",
        name: "Yod",
        sound: "y (as in yes)",
        example: "יַד",
        reading: "yad",
    },
    ConsonantRef {
        glyph: "כּ",
        name: "Kaf",
        sound: "k (as in kite)",
        example: "כֶּלֶב",
        reading: "kelev",
    },
    ConsonantRef {
        glyph: "כ/ך",
        name: "Chaf",
        sound: "ch (guttural)",
        example: "לֶחֶם",
        reading: "lechem",
    },
    ConsonantRef {
        glyph: "ל",
        name: "Lamed",
        sound: "l (as in lamp)",
        example: "לֵב",
        reading: "lev",
    },
    ConsonantRef {
        glyph: "מ/ם",
        name: "Mem",
        sound: "m (as in mom)",
        example: "מַיִם",
        reading: "mayim",
    },
    ConsonantRef {
        glyph: "נ/ן",
        name: "Nun",
        sound: "n (as in no)",
        example: "נֵר",
        reading: "ner",
    },
    ConsonantRef {
        glyph: "ס",
        name: "Samech",
        sound: "s (as in sun)",
        example: "סֵפֶר",
        reading: "sefer",
    },
    ConsonantRef {
        glyph: "ע",
        name: "Ayin",
        sound: "Silent / glottal",
        example: "עַיִן",
        reading: "ayin",
    },
    ConsonantRef {
        glyph: "פּ",
        name: "Pe",
        sound: "p (as in pen)",
        example: "פֶּה",
        reading: "pe",
    },
    ConsonantRef {
        glyph: "פ/ף",
        name: "Fe",
        sound: "f (as in fan)",
        example: "כָּף",
        reading: "kaf",
    },
    ConsonantRef {
        glyph: "צ/ץ",
        name: "Tsadi",
        sound: "ts (as in cats)",
        example: "צָהֳרַיִם",
        reading: "tsohorayim",
    },
    ConsonantRef {
        glyph: "ק",
        name: "Qof",
        sound: "k (as in kite)",
        example: "קוֹל",
        reading: "kol",
    },
    ConsonantRef {
        glyph: "ר",
        name: "Resh",
        sound: "r (uvular, like French r)",
        example: "רֹאשׁ",
        reading: "rosh",
    },
    ConsonantRef {
        glyph: "שׁ",
        name: "Shin",
        sound: "sh (as in ship)",
        example: "שָׁלוֹם",
        reading: "shalom",
    },
    ConsonantRef {
        glyph: "שׂ",
        name: "Sin",
        sound: "s (as in sun)",
        example: "שָׂדֶה",
        reading: "sade",
    },
    ConsonantRef {
        glyph: "תּ/ת",
        name: "Tav",
        sound: "t (as in top)",
        example: "תּוֹרָה",
        reading: "Torah",
    },
];

pub const VOWELS: &[VowelRef] = &[
    VowelRef {
        sample: "בָ",
        name: "Kamatz",
        sound: "ah",
        example: "שָׁלוֹם",
        hint: "fāther",
    },
    VowelRef {
        sample: "בַ",
        name: "Patach",
        sound: "ah",
        example: "יַד",
        hint: "fāther",
    },
    VowelRef {
        sample: "בֶ",
        name: "Segol",
        sound: "eh",
        example: "מֶלֶךְ",
        hint: "bĕd",
    },
    VowelRef {
        sample: "בֵ",
        name: "Tsere",
        sound: "ay",
        example: "בֵּית",
        hint: "sāy",
    },
    VowelRef {
        sample: "בִ",
        name: "Hiriq",
        sound: "ee",
        example: "מִי",
        hint: "sēe",
    },
    VowelRef {
        sample: "בֹ",
        name: "Holam",
        sound: "oh",
        example: "תּוֹרָה",
        hint: "gō",
    },
    VowelRef {
        sample: "בוּ",
        name: "Shuruq",
        sound: "oo",
        example: "שׁוּב",
        hint: "mōn",
    },
    VowelRef {
        sample: "בֻ",
        name: "Qibbuts",
        sound: "oo",
        example: "כֻּלָּם",
        hint: "mōn",
    },
    VowelRef {
        sample: "בְ",
        name: "Shva",
        sound: "e / silent",
        example: "בְּרֵאשִׁית",
        hint: "abōut",
    },
    VowelRef {
        sample: "בֱ",
        name: "Hataf Segol",
        sound: "eh",
        example: "אֱלֹהִים",
        hint: "bĕd",
    },
    VowelRef {
        sample: "בֲ",
        name: "Hataf Patach",
        sound: "ah",
        example: "חֲנֻכָּה",
        hint: "fāther",
    },
    VowelRef {
        sample: "בֳ",
        name: "Hataf Kamatz",
        sound: "oh",
        example: "עׇבְדָה",
        hint: "gō",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideSection {
    Consonant,
    Vowel,
}

/// One line of the printed guide.
#[derive(Debug, Serialize)]
pub struct GuideRow {
    pub section: GuideSection,
    pub glyph: &'static str,
    pub name: &'static str,
    pub sound: &'static str,
    pub example: &'static str,
    /// Conventional reading, where the guide gives one.
    pub reading: Option<&'static str>,
    pub transliterated: String,
}

impl GuideRow {
    /// The engine's reading differs from the conventional one.
    pub fn diverges(&self) -> bool {
        self.reading
            .is_some_and(|r| !r.eq_ignore_ascii_case(&self.transliterated))
    }
}

pub fn guide_rows() -> Vec<GuideRow> {
    let consonants = CONSONANTS.iter().map(|c| GuideRow {
        section: GuideSection::Consonant,
        glyph: c.glyph,
        name: c.name,
        sound: c.sound,
        example: c.example,
        reading: Some(c.reading),
        transliterated: transliterate(c.example),
    });
    let vowels = VOWELS.iter().map(|v| GuideRow {
        section: GuideSection::Vowel,
        glyph: v.sample,
        name: v.name,
        sound: v.sound,
        example: v.example,
        reading: None,
        transliterated: transliterate(v.example),
    });
    consonants.chain(vowels).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CONSONANTS.len(), 26);
        assert_eq!(VOWELS.len(), 12);
        assert_eq!(guide_rows().len(), 38);
    }

    #[test]
    fn test_consonant_examples_match_conventional_reading() {
        let diverging: Vec<&str> = guide_rows()
            .iter()
            .filter(|r| r.diverges())
            .map(|r| r.name)
            .collect();
        // zman (word-initial shva is voiced), tsohorayim (hataf kamatz reads
        // "a"), Torah (final he is silent).
        assert_eq!(diverging, vec!["Zayin", "Tsadi", "Tav"]);
    }

    #[test]
    fn test_vowel_samples() {
        let sounds: Vec<String> = VOWELS.iter().map(|v| transliterate(v.sample)).collect();
        assert_eq!(
            sounds,
            vec!["va", "va", "ve", "ve", "vi", "vo", "vu", "vu", "v", "ve", "va", "va"]
        );
    }

    #[test]
    fn test_vowel_examples() {
        let shalom = guide_rows()
            .into_iter()
            .find(|r| r.section == GuideSection::Vowel && r.name == "Kamatz")
            .unwrap();
        assert_eq!(shalom.transliterated, "shalom");
        assert!(!shalom.diverges());
    }
}
