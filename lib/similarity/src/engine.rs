//! Ranking aggregator
//!
//! Blends content and metadata similarity into one score, ranks candidates
//! against a single target and aggregates rankings over a reading history.

use crate::config::{ConfigError, SimilarityConfig};
use crate::content::ContentScorer;
use crate::metadata::{MetadataBreakdown, MetadataScorer};
use ahash::{AHashMap, AHashSet};
use bookmatch_core::{Book, Error, Result};
use rayon::prelude::*;
use serde::Serialize;

/// How a combined score was assembled
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Unweighted content similarity
    pub content: f32,
    /// Unweighted metadata similarity
    pub metadata: f32,
    /// Weighted metadata sub-scores (sum to `metadata`)
    pub metadata_fields: MetadataBreakdown,
}

/// A candidate ranked against one target
#[derive(Debug, Clone)]
pub struct Ranked<'a> {
    pub book: &'a Book,
    /// Combined score
    pub score: f32,
    pub breakdown: ScoreBreakdown,
}

/// A candidate ranked against a reading history
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub book: &'a Book,
    /// Average combined score over the history
    pub score: f32,
}

/// Book similarity engine
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    config: SimilarityConfig,
    content: ContentScorer,
    metadata: MetadataScorer,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        let config = SimilarityConfig::default();
        Self {
            content: ContentScorer::new(config.vectorizer.clone()),
            metadata: MetadataScorer::new(config.metadata),
            config,
        }
    }
}

impl SimilarityEngine {
    /// Create an engine; weights are validated and normalized
    pub fn new(mut config: SimilarityConfig) -> std::result::Result<Self, ConfigError> {
        config.validate_and_normalize()?;
        Ok(Self {
            content: ContentScorer::new(config.vectorizer.clone()),
            metadata: MetadataScorer::new(config.metadata),
            config,
        })
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    pub fn content_similarity(&self, a: &Book, b: &Book) -> f32 {
        self.content.similarity(a, b)
    }

    pub fn metadata_similarity(&self, a: &Book, b: &Book) -> f32 {
        self.metadata.similarity(a, b)
    }

    /// Combined score with its breakdown
    pub fn score(&self, target: &Book, candidate: &Book) -> (f32, ScoreBreakdown) {
        let content = self.content.similarity(target, candidate);
        let metadata_fields = self.metadata.breakdown(target, candidate);
        let metadata = metadata_fields.total();

        let score = self.config.content_weight * content + self.config.metadata_weight * metadata;
        (
            score,
            ScoreBreakdown {
                content,
                metadata,
                metadata_fields,
            },
        )
    }

    /// Rank `candidates` by similarity to `target`
    ///
    /// The target itself (by id) is skipped. Ties keep candidate order.
    /// At most `n` results are returned.
    pub fn find_similar<'a>(&self, target: &Book, candidates: &'a [Book], n: usize) -> Vec<Ranked<'a>> {
        let rank_one = |candidate: &'a Book| {
            let (score, breakdown) = self.score(target, candidate);
            Ranked {
                book: candidate,
                score,
                breakdown,
            }
        };

        let mut results: Vec<Ranked<'a>> = if self.config.parallel {
            candidates
                .par_iter()
                .filter(|c| c.id != target.id)
                .map(rank_one)
                .collect()
        } else {
            candidates
                .iter()
                .filter(|c| c.id != target.id)
                .map(rank_one)
                .collect()
        };

        // Stable sort, descending
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(n);
        results
    }

    /// Recommend candidates for a reading history
    ///
    /// Candidates are deduplicated by id (first occurrence wins), each history
    /// book ranks the whole pool, and every candidate's score is the average
    /// of its combined scores over the history.
    ///
    /// Fails with [`Error::InvalidArgument`] when `history` is empty.
    pub fn recommend<'a>(
        &self,
        history: &[Book],
        candidates: &'a [Book],
        n: usize,
    ) -> Result<Vec<Recommendation<'a>>> {
        if history.is_empty() {
            return Err(Error::InvalidArgument(
                "reading history must contain at least one book".to_string(),
            ));
        }

        let mut seen: AHashSet<&'a str> = AHashSet::new();
        let mut pool: Vec<&'a Book> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if seen.insert(candidate.id.as_str()) {
                pool.push(candidate);
            }
        }

        let per_history = |item: &Book| -> Vec<(&'a str, f32)> {
            pool.iter()
                .copied()
                .filter(|c| c.id != item.id)
                .map(|c| (c.id.as_str(), self.score(item, c).0))
                .collect()
        };

        let partials: Vec<Vec<(&'a str, f32)>> = if self.config.parallel {
            history.par_iter().map(per_history).collect()
        } else {
            history.iter().map(per_history).collect()
        };

        // Merge in history order so sums are identical to a sequential pass
        let divisor = history.len() as f32;
        let mut scores: AHashMap<&'a str, f32> = AHashMap::new();
        for partial in partials {
            for (id, score) in partial {
                *scores.entry(id).or_insert(0.0) += score / divisor;
            }
        }

        let mut results: Vec<Recommendation<'a>> = pool
            .into_iter()
            .filter_map(|book| {
                scores
                    .get(book.id.as_str())
                    .map(|&score| Recommendation { book, score })
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(n);
        Ok(results)
    }
}
