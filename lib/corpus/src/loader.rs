//! Directory scanner dispatching files to the CSV and PDF readers

use crate::csv_source::read_csv;
use crate::error::{CorpusError, Result};
use crate::pdf_source::PdfReader;
use crate::record::CorpusBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Csv,
    Pdf,
    Unsupported,
}

fn file_kind(path: &Path) -> FileKind {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("csv") => FileKind::Csv,
        Some("pdf") => FileKind::Pdf,
        _ => FileKind::Unsupported,
    }
}

/// Loads reading-history books from a directory
#[derive(Debug)]
pub struct CorpusLoader {
    pdf: Option<PdfReader>,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusLoader {
    /// Loader with PDF support when pdfium can be bound
    pub fn new() -> Self {
        let pdf = match PdfReader::bind() {
            Ok(reader) => Some(reader),
            Err(e) => {
                debug!("PDF support unavailable: {}", e);
                None
            }
        };
        Self { pdf }
    }

    /// Loader that never reads PDFs
    pub fn without_pdf() -> Self {
        Self { pdf: None }
    }

    pub fn supports_pdf(&self) -> bool {
        self.pdf.is_some()
    }

    /// Load every supported file of `dir`, in file-name order
    ///
    /// Unreadable files are logged and skipped. Records missing a title or
    /// author are dropped.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<CorpusBook>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CorpusError::NotADirectory(dir.to_path_buf()));
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        let mut books = Vec::new();
        for path in &paths {
            match self.load_file(path) {
                Ok(Some(mut loaded)) => books.append(&mut loaded),
                Ok(None) => {}
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        let total = books.len();
        books.retain(CorpusBook::is_complete);
        info!(
            "Loaded {} books from {} ({} incomplete records dropped)",
            books.len(),
            dir.display(),
            total - books.len()
        );
        Ok(books)
    }

    fn load_file(&self, path: &Path) -> Result<Option<Vec<CorpusBook>>> {
        match file_kind(path) {
            FileKind::Csv => read_csv(path).map(Some),
            FileKind::Pdf => match &self.pdf {
                Some(reader) => reader.read(path).map(|book| Some(vec![book])),
                None => {
                    warn!("Skipping {}: PDF support unavailable", path.display());
                    Ok(None)
                }
            },
            FileKind::Unsupported => {
                debug!("Skipping unsupported file type: {}", path.display());
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind() {
        assert_eq!(file_kind(Path::new("a.csv")), FileKind::Csv);
        assert_eq!(file_kind(Path::new("a.PDF")), FileKind::Pdf);
        assert_eq!(file_kind(Path::new("notes.txt")), FileKind::Unsupported);
        assert_eq!(file_kind(Path::new("README")), FileKind::Unsupported);
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("b.csv"),
            "title,author,genre,year,sample_text\nDune,Frank Herbert,Science Fiction,1965,Spice\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a.csv"),
            "title,author,genre,year,sample_text\nThe Hobbit,J.R.R. Tolkien,Fantasy,1937,Hole\n,Nobody,Fantasy,2000,x\n",
        )
        .unwrap();
        fs::write(dir.path().join("broken.csv"), "title,author\nx,y\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let books = CorpusLoader::without_pdf().load_dir(dir.path()).unwrap();
        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["The Hobbit", "Dune"]);
    }

    #[test]
    fn test_pdf_skipped_without_support() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("book.pdf"), b"%PDF-1.4").unwrap();
        let books = CorpusLoader::without_pdf().load_dir(dir.path()).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.csv");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            CorpusLoader::without_pdf().load_dir(&file),
            Err(CorpusError::NotADirectory(_))
        ));
    }
}
