//! TF-IDF vectorizer fit on a small in-memory corpus
//!
//! Mirrors the conventional word-level TF-IDF pipeline: normalize, tokenize,
//! drop stop-words, build n-grams, keep the most frequent terms, weight raw
//! counts by smoothed idf and L2-normalize each document.

use crate::stopwords::StopWords;
use crate::text::{ngrams, preprocess, tokenize};
use crate::vector::SparseVector;
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Vectorizer parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Keep at most this many terms, by total count across the corpus
    pub max_features: usize,
    /// Inclusive n-gram range
    pub ngram_range: (usize, usize),
    pub stop_words: StopWords,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            ngram_range: (1, 2),
            stop_words: StopWords::English,
        }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(Error::InvalidConfig("max_features must be positive".to_string()));
        }
        let (min, max) = self.ngram_range;
        if min == 0 || min > max {
            return Err(Error::InvalidConfig(format!(
                "invalid ngram_range ({}, {})",
                min, max
            )));
        }
        Ok(())
    }
}

/// Result of fitting: vocabulary in index order and one row per document
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
}

impl TfidfVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Terms of a single document, in order of appearance
    pub fn analyze(&self, doc: &str) -> Vec<String> {
        let tokens: Vec<String> = tokenize(&preprocess(doc))
            .into_iter()
            .filter(|t| !self.config.stop_words.contains(t))
            .collect();
        let (min, max) = self.config.ngram_range;
        ngrams(&tokens, min, max)
    }

    /// Fit the vocabulary and idf on `docs` and transform them
    ///
    /// Returns [`Error::EmptyVocabulary`] when no document yields a term.
    pub fn fit_transform(&self, docs: &[&str]) -> Result<TfidfMatrix> {
        let counts: Vec<AHashMap<String, u32>> = docs
            .iter()
            .map(|doc| {
                let mut tf: AHashMap<String, u32> = AHashMap::new();
                for term in self.analyze(doc) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // term -> (total count, document frequency)
        let mut stats: BTreeMap<&str, (u64, u32)> = BTreeMap::new();
        for tf in &counts {
            for (term, &count) in tf {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += u64::from(count);
                entry.1 += 1;
            }
        }

        if stats.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let mut kept: Vec<(&str, (u64, u32))> = stats.into_iter().collect();
        if kept.len() > self.config.max_features {
            // Stable sort keeps lexicographic order among equal counts
            kept.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
            kept.truncate(self.config.max_features);
            kept.sort_by(|a, b| a.0.cmp(b.0));
        }

        let n_docs = docs.len() as f64;
        let index: AHashMap<&str, usize> = kept
            .iter()
            .enumerate()
            .map(|(i, (term, _))| (*term, i))
            .collect();
        let idf: Vec<f64> = kept
            .iter()
            .map(|(_, (_, df))| ((1.0 + n_docs) / (1.0 + f64::from(*df))).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let entries = tf
                    .iter()
                    .filter_map(|(term, &count)| {
                        index
                            .get(term.as_str())
                            .map(|&i| (i, f64::from(count) * idf[i]))
                    })
                    .collect();
                let mut row = SparseVector::new(entries);
                row.normalize();
                row
            })
            .collect();

        let vocabulary = kept.into_iter().map(|(term, _)| term.to_string()).collect();
        Ok(TfidfMatrix { vocabulary, rows })
    }

    /// Fit on exactly two documents and return their cosine similarity
    pub fn pair_similarity(&self, a: &str, b: &str) -> Result<f64> {
        let matrix = self.fit_transform(&[a, b])?;
        match (matrix.row(0), matrix.row(1)) {
            (Some(ra), Some(rb)) => Ok(ra.cosine_similarity(rb)),
            _ => Ok(0.0),
        }
    }
}
