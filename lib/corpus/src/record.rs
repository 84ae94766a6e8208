use bookmatch_core::Book;
use serde::Serialize;
use std::path::PathBuf;

/// A book read from the local corpus
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CorpusBook {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub sample_text: String,
    /// File the record came from
    pub source: PathBuf,
}

impl CorpusBook {
    /// Title and author are both present
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }

    /// Convert to an engine [`Book`]; `index` makes the local id unique
    pub fn to_book(&self, index: usize) -> Book {
        let mut book = Book::new(format!("local:{}", index), self.title.trim())
            .with_authors([self.author.trim()])
            .with_description(self.sample_text.trim());
        if let Some(genre) = &self.genre {
            book = book.with_categories([genre.trim()]);
        }
        book
    }
}

/// Convert a whole corpus to engine books
pub fn to_books(corpus: &[CorpusBook]) -> Vec<Book> {
    corpus
        .iter()
        .enumerate()
        .map(|(i, record)| record.to_book(i))
        .collect()
}

/// Distinct known genres in first-seen order
pub fn genres(corpus: &[CorpusBook]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for genre in corpus.iter().filter_map(|b| b.genre.as_deref()) {
        let genre = genre.trim();
        if !genre.is_empty() && !out.iter().any(|g| g == genre) {
            out.push(genre.to_string());
        }
    }
    out
}

/// Normalize an optional cell: blank becomes `None`
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, author: &str, genre: Option<&str>) -> CorpusBook {
        CorpusBook {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.map(str::to_string),
            year: None,
            sample_text: "Once upon a time".to_string(),
            source: PathBuf::from("books.csv"),
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(record("Dune", "Frank Herbert", None).is_complete());
        assert!(!record("", "Frank Herbert", None).is_complete());
        assert!(!record("Dune", "  ", None).is_complete());
    }

    #[test]
    fn test_to_book() {
        let book = record("Dune", "Frank Herbert", Some("Science Fiction")).to_book(3);
        assert_eq!(book.id, "local:3");
        assert_eq!(book.authors, vec!["Frank Herbert".to_string()]);
        assert_eq!(book.categories, vec!["Science Fiction".to_string()]);
        assert_eq!(book.description, "Once upon a time");
        assert_eq!(book.average_rating, None);
    }

    #[test]
    fn test_to_book_without_genre() {
        let book = record("Dune", "Frank Herbert", None).to_book(0);
        assert!(book.categories.is_empty());
    }

    #[test]
    fn test_genres_distinct_in_order() {
        let corpus = vec![
            record("a", "x", Some("Fantasy")),
            record("b", "x", None),
            record("c", "x", Some("Mystery")),
            record("d", "x", Some("Fantasy")),
        ];
        assert_eq!(genres(&corpus), vec!["Fantasy".to_string(), "Mystery".to_string()]);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" 1999 ".to_string())), Some("1999".to_string()));
        assert_eq!(non_blank(None), None);
    }
}
