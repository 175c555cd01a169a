use unicode_width::UnicodeWidthStr;

use translit_core::reference::{guide_rows, GuideRow, GuideSection};

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{s}{}", " ".repeat(width - w))
    } else {
        s.to_string()
    }
}

/// Render the reference tables. Rows where the engine disagrees with the
/// reference reading are marked with `*`.
pub fn format_guide(rows: &[GuideRow]) -> String {
    let mut out = String::new();
    let mut section = None;
    for row in rows {
        if section != Some(row.section) {
            section = Some(row.section);
            out.push_str(match row.section {
                GuideSection::Consonant => "== Consonants ==\n",
                GuideSection::Vowel => "== Vowels ==\n",
            });
        }
        let mark = if row.diverges() { "*" } else { " " };
        out.push_str(&format!(
            "{mark} {} {} {} {} {}\n",
            pad(row.glyph, 4),
            pad(row.name, 16),
            pad(row.sound, 18),
            pad(row.example, 10),
            row.transliterated,
        ));
    }
    out
}

pub fn guide_cmd(json: bool) {
    let rows = guide_rows();
    if json {
        let s = die!(serde_json::to_string_pretty(&rows), "Error: {}");
        println!("{s}");
    } else {
        print!("{}", format_guide(&rows));
    }
}
