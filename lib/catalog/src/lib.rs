//! # BookMatch Catalog
//!
//! Client for the Google Books volumes API.
//!
//! - [`GoogleBooksClient::search`] - query search with per-hit detail lookup
//! - [`GoogleBooksClient::fetch_book`] - single volume, cached in-process
//! - [`GoogleBooksClient::similar_books`] - related books by category and author
//!
//! Volumes are mapped onto [`bookmatch_core::Book`] so results can be fed
//! straight into the similarity engine.

pub mod client;
pub mod error;
pub mod volume;

pub use client::{related_query, CatalogConfig, GoogleBooksClient, DEFAULT_BASE_URL};
pub use error::{CatalogError, Result};
pub use volume::{Volume, VolumeInfo, VolumeList};
