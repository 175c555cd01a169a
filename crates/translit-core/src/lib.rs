//! Pointed Hebrew to Latin transliteration, plus the corpus and reference
//! tooling around it.

pub mod corpus;
pub mod reference;
pub mod settings;
pub mod text;
pub mod translit;
pub mod unicode;

pub use translit::explain::{explain, ExplainResult};
pub use translit::{transliterate, Token, Transliterator};
