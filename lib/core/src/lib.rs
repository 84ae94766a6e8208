//! # BookMatch Core
//!
//! Core library for the BookMatch recommender.
//!
//! This crate provides the fundamental data structures and text algorithms:
//!
//! - [`Book`] - Book record consumed by the similarity engine
//! - [`text::preprocess`] - Text normalization
//! - [`TfidfVectorizer`] - TF-IDF over unigrams and bigrams with stop-word removal
//! - [`SparseVector`] - Sparse term-weight vector with cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use bookmatch_core::{TfidfVectorizer, VectorizerConfig};
//!
//! let vectorizer = TfidfVectorizer::new(VectorizerConfig::default());
//! let sim = vectorizer
//!     .pair_similarity("an epic fantasy quest", "a fantasy quest for a ring")
//!     .unwrap();
//! assert!(sim > 0.0 && sim <= 1.0);
//! ```

pub mod book;
pub mod error;
pub mod stopwords;
pub mod text;
pub mod tfidf;
pub mod vector;

pub use book::Book;
pub use error::{Error, Result};
pub use stopwords::StopWords;
pub use tfidf::{TfidfMatrix, TfidfVectorizer, VectorizerConfig, DEFAULT_MAX_FEATURES};
pub use vector::SparseVector;
