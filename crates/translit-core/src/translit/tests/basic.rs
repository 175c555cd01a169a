use super::heb;
use crate::translit::{transliterate, Resolution, Token, Transliterator, Vowel};
use crate::unicode::*;

#[test]
fn test_ascii_passthrough() {
    assert_eq!(transliterate("hello world"), "hello world");
    assert_eq!(transliterate("  hello \t  world \n"), "hello world");
    assert_eq!(transliterate(""), "");
    assert_eq!(transliterate("1, 2; 3."), "1, 2; 3.");
}

#[test]
fn test_bare_bet_is_v() {
    assert_eq!(transliterate("ב"), "v");
}

#[test]
fn test_bare_letters() {
    assert_eq!(transliterate("ק"), "k");
    assert_eq!(transliterate("צ"), "ts");
    assert_eq!(transliterate("ח"), "ch");
    assert_eq!(transliterate("א"), "");
    assert_eq!(transliterate("ע"), "");
}

#[test]
fn test_dagesh_hardening() {
    assert_eq!(transliterate(&heb(&[BET, DAGESH])), "b");
    assert_eq!(transliterate(&heb(&[KAF, DAGESH])), "k");
    assert_eq!(transliterate(&heb(&[FINAL_KAF, DAGESH])), "k");
    assert_eq!(transliterate(&heb(&[PE, DAGESH])), "p");
    assert_eq!(transliterate(&heb(&[FINAL_PE, DAGESH])), "p");
    assert_eq!(transliterate(&heb(&[KAF])), "ch");
    assert_eq!(transliterate(&heb(&[PE])), "f");
}

#[test]
fn test_dagesh_elsewhere_has_no_effect() {
    for letter in ['ג', 'ד', 'ז', 'ט', 'ל', 'מ', 'נ', 'ס', 'צ', 'ק', 'ר', 'ת'] {
        assert_eq!(
            transliterate(&heb(&[letter, DAGESH, PATACH])),
            transliterate(&heb(&[letter, PATACH])),
            "dagesh changed {letter}"
        );
    }
}

#[test]
fn test_shin_and_sin() {
    assert_eq!(transliterate(&heb(&[SHIN, SIN_DOT, KAMATZ])), "sa");
    assert_eq!(transliterate(&heb(&[SHIN, SHIN_DOT, KAMATZ])), "sha");
    assert_eq!(transliterate(&heb(&[SHIN, KAMATZ])), "sha");
}

#[test]
fn test_vowel_points() {
    let cases = [
        (PATACH, "la"),
        (KAMATZ, "la"),
        (KAMATZ_KATAN, "la"),
        (TSERE, "le"),
        (SEGOL, "le"),
        (HIRIQ, "li"),
        (HOLAM, "lo"),
        (QIBBUTS, "lu"),
        (HATAF_SEGOL, "le"),
        (HATAF_PATACH, "la"),
        (HATAF_KAMATZ, "la"),
    ];
    for (point, expected) in cases {
        assert_eq!(transliterate(&heb(&['ל', point])), expected, "{point:?}");
    }
}

#[test]
fn test_first_vowel_point_wins() {
    assert_eq!(transliterate(&heb(&['ל', HIRIQ, PATACH])), "li");
}

#[test]
fn test_vowel_point_beats_shva() {
    // Word-initial shva would be voiced "e"; the patach takes precedence.
    let s = heb(&['ל', SHVA, PATACH, 'מ', KAMATZ]);
    assert_eq!(transliterate(&s), "lama");
    let s = heb(&['ל', PATACH, SHVA]);
    assert_eq!(transliterate(&s), "la");
}

#[test]
fn test_orphaned_marks_dropped() {
    let word = heb(&['ל', KAMATZ]);
    let orphaned = heb(&[KAMATZ, DAGESH, '\u{0591}', 'ל', KAMATZ]);
    assert_eq!(transliterate(&orphaned), transliterate(&word));
    assert_eq!(transliterate(&heb(&[SHVA])), "");
    assert_eq!(transliterate(&heb(&['a', ' ', HIRIQ, 'b'])), "a b");
}

#[test]
fn test_newline_between_words_is_one_space() {
    let a = heb(&['ל', KAMATZ]);
    let b = heb(&['מ', HIRIQ]);
    assert_eq!(transliterate(&format!("{a}\n{b}")), "la mi");
    assert_eq!(transliterate(&format!("{a}\n\n  {b}\n")), "la mi");
}

#[test]
fn test_hebrew_punctuation() {
    let a = heb(&['ל', KAMATZ]);
    assert_eq!(transliterate(&format!("{a}{SOF_PASUQ}")), "la.");
    assert_eq!(transliterate(&format!("{a}{MAQAF}{a}")), "la-la");
    assert_eq!(transliterate(&format!("{a}{PASEQ} {a}")), "la la");
    assert_eq!(transliterate(&format!("{GERESH}{GERSHAYIM}")), "'\"");
}

#[test]
fn test_mixed_scripts() {
    let a = heb(&['ל', KAMATZ]);
    assert_eq!(transliterate(&format!("({a})")), "(la)");
    assert_eq!(transliterate(&format!("x{a}y")), "xlay");
}

#[test]
fn test_token_stream() {
    let input = format!("{} a", heb(&['ל', KAMATZ]));
    let tokens: Vec<Token> = Transliterator::new(&input).collect();
    assert_eq!(tokens.len(), 3);
    match &tokens[0] {
        Token::Syllable(s) => {
            assert_eq!(s.letter, 'ל');
            assert_eq!(s.consonant, "l");
            assert_eq!(s.vowel, "a");
            assert_eq!(s.resolution, Resolution::Vowel(Vowel::Kamatz));
            assert_eq!(s.span, 0..2);
        }
        other => panic!("expected syllable, got {other:?}"),
    }
    assert_eq!(tokens[1], Token::Char(' '));
    assert_eq!(tokens[2], Token::Char('a'));
}

#[test]
fn test_token_stream_keeps_raw_whitespace() {
    let tokens: Vec<Token> = Transliterator::new("a\n\tb").collect();
    assert_eq!(
        tokens,
        vec![
            Token::Char('a'),
            Token::Char(' '),
            Token::Char('\t'),
            Token::Char('b')
        ]
    );
}

#[test]
fn test_presentation_forms_read_like_decomposed_text() {
    // bet with dagesh
    assert_eq!(transliterate("\u{FB31}"), "b");
    // shin with shin dot, kamatz
    assert_eq!(transliterate(&heb(&['\u{FB2A}', KAMATZ])), "sha");
    let precomposed = heb(&['\u{FB2A}', KAMATZ, 'ל', '\u{FB4B}', 'ם']);
    let decomposed = heb(&[SHIN, SHIN_DOT, KAMATZ, 'ל', VAV, HOLAM, 'ם']);
    assert_eq!(transliterate(&precomposed), transliterate(&decomposed));
    assert_eq!(transliterate(&precomposed), "shalom");
}

#[test]
fn test_yiddish_ligatures_pass_through() {
    // double vav + patah: the ligature is not a letter, so the point is orphaned
    assert_eq!(transliterate("\u{05F0}\u{05B7}"), "\u{05F0}");
    assert_eq!(transliterate("\u{05F2}"), "\u{05F2}");
}
