//! # BookMatch Corpus
//!
//! Loads a reader's history from a directory of book files.
//!
//! - `*.csv` with columns `title, author, genre, year, sample_text`
//! - `*.pdf` using document metadata and the text of the first pages
//!
//! Records lacking a title or author are dropped before they reach the
//! similarity engine.

pub mod csv_source;
pub mod error;
pub mod loader;
pub mod pdf_source;
pub mod record;

pub use error::{CorpusError, Result};
pub use loader::CorpusLoader;
pub use record::{genres, to_books, CorpusBook};
