//! Host-facing facade for the transliteration engine.
//!
//! The reading app links this crate (static or dynamic library) and calls the
//! UniFFI exports in [`api`]. Rust callers can use the re-exported core API.

pub mod api;
pub mod trace_init;

pub use translit_core::{explain, transliterate, ExplainResult, Token, Transliterator};

uniffi::setup_scaffolding!();
