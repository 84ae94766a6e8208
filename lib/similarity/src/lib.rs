//! # BookMatch Similarity
//!
//! The book similarity engine.
//!
//! Ranks candidate books against a target book, or against a whole reading
//! history, by blending two scores:
//!
//! - **Content similarity**: cosine of TF-IDF vectors built from title,
//!   authors, description and categories, refit on every compared pair
//! - **Metadata similarity**: weighted category overlap, author overlap,
//!   rating closeness and length closeness
//!
//! ## Example
//!
//! ```rust
//! use bookmatch_core::Book;
//! use bookmatch_similarity::SimilarityEngine;
//!
//! let hobbit = Book::new("1", "The Hobbit")
//!     .with_authors(["J.R.R. Tolkien"])
//!     .with_categories(["Fantasy"]);
//! let pool = vec![
//!     Book::new("2", "The Lord of the Rings")
//!         .with_authors(["J.R.R. Tolkien"])
//!         .with_categories(["Fantasy"]),
//!     Book::new("3", "Practical Accounting").with_categories(["Business"]),
//! ];
//!
//! let engine = SimilarityEngine::default();
//! let ranked = engine.find_similar(&hobbit, &pool, 5);
//! assert_eq!(ranked[0].book.id, "2");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │   Content   │     │  Metadata   │
//! │  (TF-IDF)   │     │  (overlap)  │
//! └─────────────┘     └─────────────┘
//!        │   0.6             │   0.4
//!        └────────┬──────────┘
//!          ┌─────────────┐
//!          │   Engine    │  find_similar / recommend
//!          └─────────────┘
//! ```

pub mod config;
pub mod content;
pub mod engine;
pub mod metadata;
pub mod overlap;

// Re-export main types for convenience
pub use config::{ConfigError, MetadataWeights, SimilarityConfig};
pub use content::{combined_text, ContentScorer};
pub use engine::{Ranked, Recommendation, ScoreBreakdown, SimilarityEngine};
pub use metadata::{MetadataBreakdown, MetadataScorer};
