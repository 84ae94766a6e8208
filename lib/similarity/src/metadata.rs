//! Metadata similarity: categories, authors, rating and length

use crate::config::MetadataWeights;
use crate::overlap::{absolute_closeness, jaccard, relative_closeness};
use bookmatch_core::Book;
use serde::Serialize;

/// Ratings live on a 0-5 scale
const RATING_RANGE: f32 = 5.0;

/// Weighted contribution of each metadata sub-score
///
/// A sub-score is zero when either book lacks that field.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct MetadataBreakdown {
    pub categories: f32,
    pub authors: f32,
    pub rating: f32,
    pub length: f32,
}

impl MetadataBreakdown {
    #[inline]
    pub fn total(&self) -> f32 {
        self.categories + self.authors + self.rating + self.length
    }

    /// Name of the largest contribution, `None` when all are zero
    pub fn top_field(&self) -> Option<&'static str> {
        [
            ("categories", self.categories),
            ("authors", self.authors),
            ("rating", self.rating),
            ("length", self.length),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0.0)
        .fold(None, |best: Option<(&'static str, f32)>, (name, v)| match best {
            Some((_, bv)) if bv >= v => best,
            _ => Some((name, v)),
        })
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetadataScorer {
    weights: MetadataWeights,
}

impl MetadataScorer {
    pub fn new(weights: MetadataWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MetadataWeights {
        &self.weights
    }

    /// Metadata similarity in [0, 1] for in-domain inputs
    pub fn similarity(&self, a: &Book, b: &Book) -> f32 {
        self.breakdown(a, b).total()
    }

    /// Per-field weighted contributions
    pub fn breakdown(&self, a: &Book, b: &Book) -> MetadataBreakdown {
        let w = &self.weights;
        let mut out = MetadataBreakdown::default();

        if let Some(sim) = jaccard(&a.categories, &b.categories) {
            out.categories = w.categories * sim;
        }

        if let Some(sim) = jaccard(&a.authors, &b.authors) {
            out.authors = w.authors * sim;
        }

        if let (Some(ra), Some(rb)) = (a.known_rating(), b.known_rating()) {
            out.rating = w.rating * absolute_closeness(ra, rb, RATING_RANGE);
        }

        if let (Some(pa), Some(pb)) = (a.known_page_count(), b.known_page_count()) {
            out.length = w.length * relative_closeness(f64::from(pa), f64::from(pb));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Book {
        Book::new("1", "The Hobbit")
            .with_categories(["Fantasy", "Adventure"])
            .with_authors(["Tolkien"])
            .with_rating(4.5)
            .with_page_count(300)
    }

    fn candidate() -> Book {
        Book::new("2", "The Lord of the Rings")
            .with_categories(["Fantasy", "Epic"])
            .with_authors(["Tolkien"])
            .with_rating(4.7)
            .with_page_count(1200)
    }

    #[test]
    fn test_reference_scenario() {
        let scorer = MetadataScorer::default();
        let b = scorer.breakdown(&target(), &candidate());

        assert!((b.categories - 0.4 / 3.0).abs() < 1e-4);
        assert!((b.authors - 0.3).abs() < 1e-6);
        assert!((b.rating - 0.192).abs() < 1e-4);
        assert!((b.length - 0.025).abs() < 1e-4);
        assert!((b.total() - 0.650).abs() < 1e-3, "got {}", b.total());
        assert_eq!(b.top_field(), Some("authors"));
    }

    #[test]
    fn test_symmetry() {
        let scorer = MetadataScorer::default();
        assert_eq!(
            scorer.similarity(&target(), &candidate()),
            scorer.similarity(&candidate(), &target())
        );
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let scorer = MetadataScorer::default();
        let bare = Book::new("3", "Untitled");
        let b = scorer.breakdown(&target(), &bare);
        assert_eq!(b, MetadataBreakdown::default());
        assert_eq!(b.top_field(), None);
    }

    #[test]
    fn test_zero_rating_and_pages_are_absent() {
        let scorer = MetadataScorer::default();
        let zeroed = Book::new("4", "Zero").with_rating(0.0).with_page_count(0);
        let b = scorer.breakdown(&target(), &zeroed);
        assert_eq!(b.rating, 0.0);
        assert_eq!(b.length, 0.0);
    }

    #[test]
    fn test_identical_metadata_is_one() {
        let scorer = MetadataScorer::default();
        let sim = scorer.similarity(&target(), &target());
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_score_range() {
        let scorer = MetadataScorer::default();
        let books = [
            target(),
            candidate(),
            Book::new("5", "x").with_rating(5.0).with_page_count(1),
            Book::new("6", "y").with_rating(0.5).with_page_count(5000),
            Book::new("7", "z").with_categories(["Other"]).with_authors(["Someone"]),
        ];
        for a in &books {
            for b in &books {
                let sim = scorer.similarity(a, b);
                assert!((0.0..=1.0 + 1e-6).contains(&sim), "out of range: {}", sim);
            }
        }
    }
}
