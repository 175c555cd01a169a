use std::fs;
use std::path::Path;

pub fn settings_export() {
    print!("{}", translit_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        translit_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: corpus.similarity_threshold={}, corpus.strip_cantillation={}, \
         output.explain_column_width={}",
        s.corpus.similarity_threshold, s.corpus.strip_cantillation, s.output.explain_column_width
    );
}

/// Install a custom settings file for the rest of the process.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        translit_core::settings::init_custom(content),
        "Error in {file}: {}"
    );
}

/// Message for `--trace-dir` when this build has no trace support.
pub fn trace_warning(enabled: bool) -> Option<&'static str> {
    if enabled {
        None
    } else {
        Some("Warning: --trace-dir ignored (built without the `trace` feature)")
    }
}

/// Start the JSON trace log, or warn that it is unavailable.
pub fn trace_start(dir: &str) {
    let enabled = translit_engine::trace_init::ENABLED;
    if let Some(msg) = trace_warning(enabled) {
        eprintln!("{msg}");
    }
    translit_engine::trace_init::init_tracing(Path::new(dir));
}
