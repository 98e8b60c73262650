//! Per-query TF-IDF vector space and cosine similarity

mod tfidf;
mod tokenizer;

pub use tfidf::{IndexError, TfIdfSpace};
pub use tokenizer::{is_stop_word, tokenize};
