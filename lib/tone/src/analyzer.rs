//! Tone, style and keyword analysis of a text sample

use crate::lexicon::{intensity, is_negation, polarity};
use ahash::AHashMap;
use bookmatch_core::StopWords;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Polarity above this is positive, below its negation is negative
pub const TONE_THRESHOLD: f32 = 0.1;
/// Fewer sentences than this reads as concise
pub const CONCISE_BELOW: usize = 5;
/// More sentences than this reads as expansive
pub const EXPANSIVE_ABOVE: usize = 15;
pub const MAX_KEYWORDS: usize = 10;

/// Negated sentiment words flip sign and lose half their strength
const NEGATION_FACTOR: f32 = -0.5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > TONE_THRESHOLD {
            Tone::Positive
        } else if polarity < -TONE_THRESHOLD {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Style {
    Concise,
    Expansive,
    Unknown,
}

impl Style {
    pub fn from_sentence_count(count: usize) -> Self {
        if count < CONCISE_BELOW {
            Style::Concise
        } else if count > EXPANSIVE_ABOVE {
            Style::Expansive
        } else {
            Style::Unknown
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToneReport {
    pub tone: Tone,
    /// Mean polarity of sentiment words, in [-1, 1]
    pub polarity: f32,
    pub style: Style,
    pub sentence_count: usize,
    pub keywords: Vec<String>,
}

pub fn analyze(text: &str) -> ToneReport {
    let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();
    let polarity = sentiment_polarity(&words);
    let sentence_count = count_sentences(text);

    ToneReport {
        tone: Tone::from_polarity(polarity),
        polarity,
        style: Style::from_sentence_count(sentence_count),
        sentence_count,
        keywords: top_keywords(&words, MAX_KEYWORDS),
    }
}

/// Mean polarity of the sentiment words in `words`; 0 when there are none
pub fn sentiment_polarity(words: &[String]) -> f32 {
    let mut scores = Vec::new();
    let mut negated = false;
    let mut factor = 1.0f32;

    for word in words {
        if is_negation(word) {
            negated = true;
        } else if let Some(f) = intensity(word) {
            factor *= f;
        } else if let Some(p) = polarity(word) {
            let mut score = p * factor;
            if negated {
                score *= NEGATION_FACTOR;
            }
            scores.push(score.clamp(-1.0, 1.0));
            negated = false;
            factor = 1.0;
        } else {
            negated = false;
            factor = 1.0;
        }
    }

    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f32>() / scores.len() as f32
    }
}

fn count_sentences(text: &str) -> usize {
    // The sentence segmenter panics on empty input
    if !text.chars().any(char::is_alphanumeric) {
        return 0;
    }
    text.unicode_sentences()
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}

/// Most frequent alphabetic non-stop-words; ties keep first occurrence
pub fn top_keywords(words: &[String], limit: usize) -> Vec<String> {
    // word -> (count, first position)
    let mut counts: AHashMap<&str, (usize, usize)> = AHashMap::new();
    for (pos, word) in words.iter().enumerate() {
        if !word.chars().all(char::is_alphabetic) || StopWords::English.contains(word) {
            continue;
        }
        counts.entry(word.as_str()).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}
