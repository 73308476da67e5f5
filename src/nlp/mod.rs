//! Natural language processing components
//!
//! Normalization, tokenization, stopword filtering and stemming.

pub mod normalizer;
pub mod resources;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
