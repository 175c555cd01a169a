pub mod commands;
pub mod corpus_source;
