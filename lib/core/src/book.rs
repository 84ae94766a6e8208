use serde::{Deserialize, Serialize};

/// A book record as consumed by the similarity engine
///
/// Only `id`, `title`, `authors`, `description`, `categories`,
/// `average_rating` and `page_count` take part in scoring. The remaining
/// fields are carried through from the catalog for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Average reader rating in [0, 5]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f32>,
    #[serde(default)]
    pub ratings_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
    #[serde(default)]
    pub isbn13: Vec<String>,
}

impl Book {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.average_rating = Some(rating);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_page_count(mut self, pages: u32) -> Self {
        self.page_count = Some(pages);
        self
    }

    /// Rating usable for scoring. A zero rating means "no ratings yet"
    /// in catalog data and is reported as absent.
    #[inline]
    pub fn known_rating(&self) -> Option<f32> {
        self.average_rating.filter(|r| *r != 0.0 && r.is_finite())
    }

    /// Page count usable for scoring; zero is reported as absent.
    #[inline]
    pub fn known_page_count(&self) -> Option<u32> {
        self.page_count.filter(|p| *p != 0)
    }

    /// Authors joined for display, `N/A` when there are none
    pub fn authors_display(&self) -> String {
        join_or_na(&self.authors)
    }

    /// Categories joined for display, `N/A` when there are none
    pub fn categories_display(&self) -> String {
        join_or_na(&self.categories)
    }
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        "N/A".to_string()
    } else {
        values.join(", ")
    }
}
