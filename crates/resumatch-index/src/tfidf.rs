//! TF-IDF vector space built fresh over one query and its candidate corpus

use crate::tokenizer::tokenize;
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("corpus has no candidate documents")]
    EmptyCorpus,
}

/// Vector space over the query text plus every candidate text.
///
/// Vocabulary and IDF weights are derived from exactly the documents passed
/// to [`TfIdfSpace::fit`]; nothing is carried across queries.
#[derive(Debug, Clone)]
pub struct TfIdfSpace {
    vocab: HashMap<String, usize>,
    idf: Vec<f64>,
    query_vec: Vec<f64>,
    doc_vecs: Vec<Vec<f64>>,
    doc_ids: Vec<String>,
}

impl TfIdfSpace {
    /// Fit the space. `documents` are `(identifier, text)` pairs; their order is
    /// preserved in [`TfIdfSpace::similarities`].
    pub fn fit<I, S>(query_text: &str, documents: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut doc_ids = Vec::new();
        let mut tokenized = vec![tokenize(query_text)];
        for (id, text) in documents {
            doc_ids.push(id.as_ref().to_string());
            tokenized.push(tokenize(text.as_ref()));
        }

        if doc_ids.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        // Build vocabulary, sorted so vector layout is stable
        let vocab_set: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocab: HashMap<String, usize> = vocab_set
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        // Smoothed IDF over the whole corpus, query included
        let doc_count = tokenized.len();
        let mut doc_freq = vec![0usize; vocab.len()];
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                if let Some(&idx) = vocab.get(token) {
                    doc_freq[idx] += 1;
                }
            }
        }
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((doc_count + 1) as f64 / (df + 1) as f64).ln() + 1.0)
            .collect();

        let mut vectors = tokenized
            .iter()
            .map(|tokens| weigh(tokens, &vocab, &idf));
        let query_vec = vectors.next().unwrap_or_default();
        let doc_vecs: Vec<Vec<f64>> = vectors.collect();

        debug!(
            documents = doc_ids.len(),
            vocabulary = vocab.len(),
            "fitted tf-idf space"
        );

        Ok(Self {
            vocab,
            idf,
            query_vec,
            doc_vecs,
            doc_ids,
        })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocab.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocab.get(term).map(|&idx| self.idf[idx])
    }

    /// Cosine similarity of the query against each document, in fit order.
    pub fn similarities(&self) -> Vec<(String, f64)> {
        self.doc_ids
            .iter()
            .zip(&self.doc_vecs)
            .map(|(id, vec)| (id.clone(), cosine_similarity(&self.query_vec, vec)))
            .collect()
    }
}

/// Raw term counts times IDF, L2-normalized. A document with no known terms
/// stays the zero vector.
fn weigh(tokens: &[String], vocab: &HashMap<String, usize>, idf: &[f64]) -> Vec<f64> {
    let mut vec = vec![0.0; vocab.len()];
    for token in tokens {
        if let Some(&idx) = vocab.get(token) {
            vec[idx] += 1.0;
        }
    }
    for (value, weight) in vec.iter_mut().zip(idf) {
        *value *= weight;
    }
    let n = norm(&vec);
    if n > 0.0 {
        for value in &mut vec {
            *value /= n;
        }
    }
    vec
}

fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine of two non-negative vectors, 0 when either is zero.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot_product(a, b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}
