// CSV reading-history files: one book per row
use crate::error::{CorpusError, Result};
use crate::record::{non_blank, CorpusBook};
use serde::Deserialize;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "author", "genre", "year", "sample_text"];

#[derive(Debug, Deserialize)]
struct Row {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    year: Option<String>,
    sample_text: Option<String>,
}

/// Read every row of a CSV file
///
/// The header must contain all of [`REQUIRED_COLUMNS`]; extra columns are ignored.
pub fn read_csv(path: &Path) -> Result<Vec<CorpusBook>> {
    let csv_err = |source| CorpusError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CorpusError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    let mut books = Vec::new();
    for row in reader.deserialize::<Row>() {
        let row = row.map_err(csv_err)?;
        books.push(CorpusBook {
            title: row.title.unwrap_or_default(),
            author: row.author.unwrap_or_default(),
            genre: non_blank(row.genre),
            year: non_blank(row.year),
            sample_text: row.sample_text.unwrap_or_default(),
            source: path.to_path_buf(),
        });
    }

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "title,author,genre,year,sample_text,isbn\n\
             The Hobbit,J.R.R. Tolkien,Fantasy,1937,\"In a hole in the ground, there lived a hobbit.\",123\n\
             Dune,Frank Herbert,,1965,A desert planet,456\n",
        )
        .unwrap();

        let books = read_csv(&path).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "The Hobbit");
        assert_eq!(books[0].genre.as_deref(), Some("Fantasy"));
        assert_eq!(books[0].year.as_deref(), Some("1937"));
        assert_eq!(books[0].sample_text, "In a hole in the ground, there lived a hobbit.");
        assert_eq!(books[1].genre, None);
        assert_eq!(books[1].source, path);
    }

    #[test]
    fn test_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.csv");
        fs::write(&path, "title,author\nDune,Frank Herbert\n").unwrap();

        match read_csv(&path) {
            Err(CorpusError::MissingColumns { missing, .. }) => {
                assert_eq!(missing, vec!["genre", "year", "sample_text"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_cells_become_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gaps.csv");
        fs::write(&path, "title,author,genre,year,sample_text\n,Anonymous,,,\n").unwrap();

        let books = read_csv(&path).unwrap();
        assert_eq!(books.len(), 1);
        assert!(!books[0].is_complete());
    }
}
