//! # BookMatch Tone
//!
//! Lightweight tagging of a book's text sample: overall tone from a word
//! polarity lexicon, writing style from sentence count, and the most
//! frequent content words.
//!
//! ```
//! use bookmatch_tone::{analyze, Tone};
//!
//! let report = analyze("A wonderful, warm story about a kind old baker.");
//! assert_eq!(report.tone, Tone::Positive);
//! ```

pub mod analyzer;
mod lexicon;

pub use analyzer::{analyze, Style, Tone, ToneReport};
