//! # BookMatch
//!
//! Book recommendations from content and metadata similarity.
//!
//! BookMatch compares books by blending a TF-IDF cosine over their text
//! (title, authors, description, categories) with a weighted overlap of
//! their metadata (categories, authors, rating, page count).
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! export GOOGLE_BOOKS_API_KEY=...
//! bookmatch search "the left hand of darkness"
//! bookmatch recommend ./my-books --limit 10
//! bookmatch similar "dune" --pick 1 --rerank
//! bookmatch analyze chapter1.txt
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use bookmatch::prelude::*;
//!
//! let history = vec![Book::new("h1", "Dune")
//!     .with_authors(["Frank Herbert"])
//!     .with_categories(["Science Fiction"])];
//! let candidates = vec![
//!     Book::new("c1", "Children of Dune")
//!         .with_authors(["Frank Herbert"])
//!         .with_categories(["Science Fiction"]),
//!     Book::new("c2", "Bread Baking Basics").with_categories(["Cooking"]),
//! ];
//!
//! let engine = SimilarityEngine::default();
//! let picks = engine.recommend(&history, &candidates, 1).unwrap();
//! assert_eq!(picks[0].book.id, "c1");
//! ```
//!
//! ## Crate Structure
//!
//! - `bookmatch-core` - Book model, text preprocessing, TF-IDF vectorizer
//! - `bookmatch-similarity` - content/metadata scorers and the ranking engine
//! - `bookmatch-catalog` - Google Books client with detail caching
//! - `bookmatch-corpus` - reading-history loader for CSV and PDF files
//! - `bookmatch-tone` - tone, style and keyword tagging of text samples

// Re-export core types
pub use bookmatch_core::{
    Book, Error, Result, SparseVector, StopWords, TfidfVectorizer, VectorizerConfig,
};

// Re-export the engine
pub use bookmatch_similarity::{
    ConfigError, MetadataWeights, Ranked, Recommendation, ScoreBreakdown, SimilarityConfig,
    SimilarityEngine,
};

// Re-export collaborators
pub use bookmatch_catalog::{CatalogConfig, CatalogError, GoogleBooksClient};
pub use bookmatch_corpus::{CorpusBook, CorpusError, CorpusLoader};
pub use bookmatch_tone::{analyze, Style, Tone, ToneReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Book, Error, Result,
        SimilarityConfig, SimilarityEngine, Ranked, Recommendation, ScoreBreakdown,
        CatalogConfig, GoogleBooksClient,
        CorpusBook, CorpusLoader,
        ToneReport,
    };
}
