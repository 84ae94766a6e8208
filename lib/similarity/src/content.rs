//! Content similarity between two books' descriptive text

use bookmatch_core::text::preprocess;
use bookmatch_core::{Book, TfidfVectorizer, VectorizerConfig};

/// Combined, normalized text of a book: title, authors, description, categories
///
/// Each field is normalized on its own; empty fields are skipped.
pub fn combined_text(book: &Book) -> String {
    let fields = [
        book.title.clone(),
        book.authors.join(" "),
        book.description.clone(),
        book.categories.join(" "),
    ];

    fields
        .iter()
        .map(|field| preprocess(field))
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scores textual closeness with a TF-IDF vectorizer refit on every pair
#[derive(Debug, Clone, Default)]
pub struct ContentScorer {
    vectorizer: TfidfVectorizer,
}

impl ContentScorer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(config),
        }
    }

    /// Cosine similarity of the two books' TF-IDF vectors, in [0, 1]
    ///
    /// Empty text or an empty vocabulary degrades to 0.0.
    pub fn similarity(&self, a: &Book, b: &Book) -> f32 {
        let text_a = combined_text(a);
        let text_b = combined_text(b);
        if text_a.is_empty() || text_b.is_empty() {
            return 0.0;
        }

        self.vectorizer
            .pair_similarity(&text_a, &text_b)
            .map(|sim| sim as f32)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbit() -> Book {
        Book::new("1", "The Hobbit")
            .with_authors(["J.R.R. Tolkien"])
            .with_categories(["Fantasy", "Adventure"])
            .with_description("A fantasy novel about a hobbit who goes on an adventure.")
    }

    fn lotr() -> Book {
        Book::new("2", "The Lord of the Rings")
            .with_authors(["J.R.R. Tolkien"])
            .with_categories(["Fantasy", "Epic"])
            .with_description("An epic fantasy novel about a quest to destroy a powerful ring.")
    }

    #[test]
    fn test_combined_text() {
        assert_eq!(
            combined_text(&hobbit()),
            "the hobbit j r r tolkien a fantasy novel about a hobbit who goes on an adventure fantasy adventure"
        );
    }

    #[test]
    fn test_combined_text_skips_empty_fields() {
        let book = Book::new("x", "Dune").with_categories(["Science Fiction"]);
        assert_eq!(combined_text(&book), "dune science fiction");
    }

    #[test]
    fn test_self_similarity_is_one() {
        let scorer = ContentScorer::default();
        let sim = scorer.similarity(&hobbit(), &hobbit());
        assert!((sim - 1.0).abs() < 1e-5, "Expected ~1.0, got {}", sim);
    }

    #[test]
    fn test_related_books_score_between_bounds() {
        let scorer = ContentScorer::default();
        let sim = scorer.similarity(&hobbit(), &lotr());
        assert!(sim > 0.0 && sim < 1.0, "got {}", sim);
    }

    #[test]
    fn test_unigram_pair_exact_value() {
        let scorer = ContentScorer::new(VectorizerConfig {
            ngram_range: (1, 1),
            ..Default::default()
        });
        // "dragon" is shared (idf 1), "hoard" and "gold" are unique (idf ln(3/2) + 1)
        let idf = 1.5f64.ln() + 1.0;
        let expected = 1.0 / (1.0 + idf * idf);
        let sim = scorer.similarity(&Book::new("a", "Dragon Hoard"), &Book::new("b", "Dragon Gold"));
        assert!((sim as f64 - expected).abs() < 1e-5, "expected {}, got {}", expected, sim);
    }

    #[test]
    fn test_symmetry() {
        let scorer = ContentScorer::default();
        assert_eq!(
            scorer.similarity(&hobbit(), &lotr()),
            scorer.similarity(&lotr(), &hobbit())
        );
    }

    #[test]
    fn test_empty_text_is_zero() {
        let scorer = ContentScorer::default();
        let empty = Book::new("3", "");
        assert_eq!(scorer.similarity(&empty, &hobbit()), 0.0);
        assert_eq!(scorer.similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_stop_words_only_is_zero() {
        let scorer = ContentScorer::default();
        let a = Book::new("a", "The And Of");
        let b = Book::new("b", "Of The");
        assert_eq!(scorer.similarity(&a, &b), 0.0);
    }
}
