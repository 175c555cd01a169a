use std::fs;
use std::io::{self, BufRead, BufReader, Write};

use translit_core::translit::explain::{explain, format_text};
use translit_core::transliterate;

/// Transliterate `input` line by line. Returns the number of lines written.
pub fn convert_lines<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        writeln!(out, "{}", transliterate(&line?))?;
        count += 1;
    }
    Ok(count)
}

pub fn convert_cmd(text: &[String], file: Option<&str>) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(path) = file {
        let f = die!(fs::File::open(path), "Error opening {path}: {}");
        die!(convert_lines(BufReader::new(f), &mut out), "Error: {}");
    } else if !text.is_empty() {
        die!(writeln!(out, "{}", transliterate(&text.join(" "))), "Error: {}");
    } else {
        die!(convert_lines(io::stdin().lock(), &mut out), "Error: {}");
    }
}

pub fn explain_cmd(text: &str, json: bool) {
    let result = explain(text);
    if json {
        let s = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{s}");
    } else {
        print!("{}", format_text(&result));
    }
}
