//! UniFFI export layer: type-safe bindings for the host reading app.

mod types;

pub use types::{TranslitCluster, TranslitError, TranslitExplain};

use std::path::Path;

use translit_core::text::has_visible_output;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
pub fn transliterate(text: String) -> String {
    translit_core::transliterate(&text)
}

/// Transliteration for the panel under the drill card: `None` when there is
/// nothing worth showing (only apostrophes or whitespace).
#[uniffi::export]
pub fn transliterate_for_display(text: String) -> Option<String> {
    let out = translit_core::transliterate(&text);
    has_visible_output(&out).then_some(out)
}

#[uniffi::export]
pub fn explain_text(text: String) -> TranslitExplain {
    translit_core::explain(&text).into()
}

#[uniffi::export]
pub fn strip_cantillation(text: String) -> String {
    translit_core::unicode::strip_cantillation(&text)
}

#[uniffi::export]
pub fn settings_load_config(path: String) -> Result<(), TranslitError> {
    let content = std::fs::read_to_string(&path).map_err(|e| TranslitError::Io {
        msg: format!("{path}: {e}"),
    })?;
    translit_core::settings::init_custom(content)
        .map_err(|e| TranslitError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
pub fn settings_default_config() -> String {
    translit_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
pub fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
