use std::fs;
use std::path::Path;

use translit_core::corpus::{clean_line, dedupe, flatten_chapters, CorpusError};
use translit_core::settings::settings;

use crate::corpus_source;

/// Turn downloaded chapters into clean, distinct lines.
pub fn prepare_chapters(
    chapters: &[Vec<String>],
    strip: bool,
    threshold: f64,
) -> Result<Vec<String>, CorpusError> {
    dedupe(flatten_chapters(chapters, strip), threshold)
}

/// Clean a plain text file with one verse per line.
pub fn clean_lines(text: &str, strip: bool, threshold: f64) -> Result<Vec<String>, CorpusError> {
    let lines: Vec<String> = text
        .lines()
        .map(|line| clean_line(line, strip))
        .filter(|line| !line.is_empty())
        .collect();
    dedupe(lines, threshold)
}

fn write_lines(output: &str, lines: &[String]) {
    let json = die!(serde_json::to_string_pretty(lines), "Error serializing corpus: {}");
    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            die!(fs::create_dir_all(parent), "Error creating directory: {}");
        }
    }
    die!(fs::write(output, json), "Error writing {output}: {}");
    eprintln!("Wrote {} lines to {output}", lines.len());
}

pub fn fetch(output: &str, url: Option<&str>, threshold: Option<f64>) {
    let cfg = &settings().corpus;
    let url = url.unwrap_or(&cfg.source_url);
    let threshold = threshold.unwrap_or(cfg.similarity_threshold);

    eprintln!("Downloading {url} ...");
    let chapters = die!(corpus_source::fetch_chapters(url), "Error fetching corpus: {}");
    let lines = die!(
        prepare_chapters(&chapters, cfg.strip_cantillation, threshold),
        "Error preparing corpus: {}"
    );
    write_lines(output, &lines);
}

pub fn clean(input: &str, output: &str, threshold: Option<f64>) {
    let cfg = &settings().corpus;
    let threshold = threshold.unwrap_or(cfg.similarity_threshold);

    let text = die!(fs::read_to_string(input), "Error reading {input}: {}");
    let lines = die!(
        clean_lines(&text, cfg.strip_cantillation, threshold),
        "Error cleaning corpus: {}"
    );
    write_lines(output, &lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use translit_core::corpus::parse_chapters;

    // lamed kamatz + etnahta, lamed kamatz
    const VERSE_A: &str = "\u{05DC}\u{05B8}\u{0591} \u{05DC}\u{05B8}";
    const VERSE_B: &str = "\u{05DE}\u{05B4}\u{05D9}";

    #[test]
    fn prepare_strips_and_dedupes() {
        let json = serde_json::json!({
            "he": [[VERSE_A, VERSE_B], ["\u{05DC}\u{05B8}  \u{05DC}\u{05B8}"]],
        })
        .to_string();
        let chapters = parse_chapters(&json).unwrap();
        let lines = prepare_chapters(&chapters, true, 0.95).unwrap();
        assert_eq!(lines, vec!["\u{05DC}\u{05B8} \u{05DC}\u{05B8}", VERSE_B]);
    }

    #[test]
    fn prepare_keeps_cantillation_when_asked() {
        let chapters = vec![vec![VERSE_A.to_string()]];
        assert_eq!(prepare_chapters(&chapters, false, 0.95).unwrap(), vec![VERSE_A]);
    }

    #[test]
    fn prepare_empty_chapters() {
        let chapters = vec![vec![], vec!["   ".to_string()]];
        assert!(prepare_chapters(&chapters, true, 0.95).unwrap().is_empty());
    }

    #[test]
    fn clean_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.txt");
        let output = dir.path().join("out").join("corpus.json");
        fs::write(&input, format!("{VERSE_A}\n\n   \n{VERSE_B}\n{VERSE_B}\n")).unwrap();

        clean(input.to_str().unwrap(), output.to_str().unwrap(), Some(0.95));

        let written: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, vec!["\u{05DC}\u{05B8} \u{05DC}\u{05B8}", VERSE_B]);
    }

    #[test]
    fn clean_lines_threshold_validated() {
        assert!(matches!(
            clean_lines("a\nb", true, 2.0),
            Err(CorpusError::InvalidThreshold(_))
        ));
    }
}
