//! Google Books volume JSON and its mapping onto [`Book`]

use bookmatch_core::Book;
use serde::Deserialize;

/// Response of the volume search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeList {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Vec<VolumeRef>,
}

impl VolumeList {
    /// Ids of the returned volumes, in response order
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().filter_map(|item| item.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// Response of the single-volume endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub average_rating: Option<f32>,
    pub ratings_count: Option<u32>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub language: Option<String>,
    pub preview_link: Option<String>,
    #[serde(default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

impl Volume {
    /// Convert to a [`Book`] keyed by `id` (the id that was requested)
    pub fn into_book(self, id: &str) -> Book {
        let info = self.volume_info;
        Book {
            id: id.to_string(),
            title: info.title.unwrap_or_else(|| "Unknown".to_string()),
            authors: info.authors,
            description: info.description.unwrap_or_default(),
            categories: info.categories,
            average_rating: info.average_rating,
            ratings_count: info.ratings_count.unwrap_or(0),
            page_count: info.page_count,
            publication_date: info.published_date,
            language: info.language,
            preview_link: info.preview_link,
            isbn13: info
                .industry_identifiers
                .into_iter()
                .filter(|ident| ident.kind == "ISBN_13")
                .map(|ident| ident.identifier)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_volume() {
        let volume: Volume = serde_json::from_value(json!({
            "id": "abc123",
            "volumeInfo": {
                "title": "The Hobbit",
                "authors": ["J.R.R. Tolkien"],
                "description": "There and back again.",
                "categories": ["Fiction"],
                "averageRating": 4.5,
                "ratingsCount": 120,
                "publishedDate": "1937-09-21",
                "pageCount": 310,
                "language": "en",
                "previewLink": "http://books.example/preview",
                "industryIdentifiers": [
                    {"type": "ISBN_10", "identifier": "0261103342"},
                    {"type": "ISBN_13", "identifier": "9780261103344"}
                ]
            }
        }))
        .unwrap();

        let book = volume.into_book("abc123");
        assert_eq!(book.title, "The Hobbit");
        assert_eq!(book.average_rating, Some(4.5));
        assert_eq!(book.ratings_count, 120);
        assert_eq!(book.page_count, Some(310));
        assert_eq!(book.publication_date.as_deref(), Some("1937-09-21"));
        assert_eq!(book.isbn13, vec!["9780261103344".to_string()]);
    }

    #[test]
    fn test_sparse_volume_defaults() {
        let volume: Volume = serde_json::from_value(json!({"id": "x", "volumeInfo": {}})).unwrap();
        let book = volume.into_book("x");
        assert_eq!(book.title, "Unknown");
        assert!(book.authors.is_empty());
        assert!(book.description.is_empty());
        assert_eq!(book.average_rating, None);
        assert_eq!(book.ratings_count, 0);
        assert!(book.isbn13.is_empty());
    }

    #[test]
    fn test_volume_without_info() {
        let volume: Volume = serde_json::from_value(json!({"id": "y"})).unwrap();
        assert_eq!(volume.into_book("y").title, "Unknown");
    }

    #[test]
    fn test_volume_list_ids() {
        let list: VolumeList = serde_json::from_value(json!({
            "totalItems": 3,
            "items": [{"id": "a"}, {"kind": "books#volume"}, {"id": "c"}]
        }))
        .unwrap();
        assert_eq!(list.ids(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_empty_volume_list() {
        let list: VolumeList = serde_json::from_value(json!({"totalItems": 0})).unwrap();
        assert!(list.ids().is_empty());
    }
}
