// Text normalization shared by the vectorizer and the tone tagger

/// Normalize raw text for vectorization
///
/// Lower-cases, replaces every character that is not a letter, digit or
/// whitespace with a space, collapses whitespace runs and trims.
/// Empty input yields an empty string.
pub fn preprocess(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Split normalized text into word tokens
/// Single-character tokens are dropped, the usual rule for TF-IDF vocabularies
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|s| s.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Build word n-grams for every n in `min..=max`, joined by a single space
pub fn ngrams(tokens: &[String], min: usize, max: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for n in min.max(1)..=max {
        if n > tokens.len() {
            break;
        }
        grams.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    grams
}
