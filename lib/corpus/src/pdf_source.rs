// PDF books: metadata title/author plus text of the opening pages
use crate::error::{CorpusError, Result};
use crate::record::CorpusBook;
use pdfium_render::prelude::*;
use std::path::Path;

/// Number of leading pages sampled for text
pub const SAMPLE_PAGES: usize = 2;

/// PDF reader backed by the system pdfium library
pub struct PdfReader {
    pdfium: Pdfium,
}

impl std::fmt::Debug for PdfReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfReader").finish_non_exhaustive()
    }
}

impl PdfReader {
    /// Bind to pdfium, looking next to the executable first and then in
    /// the system library path
    pub fn bind() -> std::result::Result<Self, String> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| e.to_string())?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    pub fn read(&self, path: &Path) -> Result<CorpusBook> {
        let pdf_err = |e: PdfiumError| CorpusError::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let document = self.pdfium.load_pdf_from_file(path, None).map_err(pdf_err)?;

        let tag = |kind: PdfDocumentMetadataTagType| {
            document
                .metadata()
                .get(kind)
                .map(|t| t.value().trim().to_string())
                .unwrap_or_default()
        };
        let title = tag(PdfDocumentMetadataTagType::Title);
        let author = tag(PdfDocumentMetadataTagType::Author);

        let mut pages = Vec::with_capacity(SAMPLE_PAGES);
        for page in document.pages().iter().take(SAMPLE_PAGES) {
            let text = page.text().map_err(pdf_err)?.all();
            if !text.trim().is_empty() {
                pages.push(text.trim().to_string());
            }
        }

        Ok(CorpusBook {
            title,
            author,
            genre: None,
            year: None,
            sample_text: pages.join(" "),
            source: path.to_path_buf(),
        })
    }
}
