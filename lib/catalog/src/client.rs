//! Google Books API client

use crate::error::{CatalogError, Result};
use crate::volume::{Volume, VolumeList};
use bookmatch_core::Book;
use moka::sync::Cache;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Client settings
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Value of `langRestrict`
    pub language: String,
    /// Pause between detail lookups of one search
    pub item_delay: Duration,
    /// Capacity of the volume detail cache
    pub cache_capacity: usize,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "en".to_string(),
            item_delay: Duration::from_millis(100),
            cache_capacity: 1000,
            timeout: Duration::from_secs(30),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_item_delay(mut self, delay: Duration) -> Self {
        self.item_delay = delay;
        self
    }

    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

/// Build the query used to find books related to `book`:
/// its first two categories and its first author, joined with ` OR `
pub fn related_query(book: &Book) -> Option<String> {
    let mut terms: Vec<String> = book.categories.iter().take(2).cloned().collect();
    if let Some(author) = book.authors.first() {
        terms.push(format!("inauthor:{}", author));
    }

    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" OR "))
    }
}

/// Async client; clones share the HTTP pool and the detail cache
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    http: reqwest::Client,
    config: CatalogConfig,
    api_key: String,
    /// Volume id -> mapped book, bounded by `cache_capacity`
    cache: Cache<String, Book>,
}

impl GoogleBooksClient {
    pub fn new(config: CatalogConfig, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::MissingApiKey);
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity as u64)
            .build();

        Ok(Self {
            http,
            config,
            api_key,
            cache,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Number of cached volumes, after pending evictions are applied
    pub fn cached_len(&self) -> usize {
        self.cache.run_pending_tasks();
        self.cache.entry_count() as usize
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        context: &str,
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                context: context.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one volume by id, served from the cache when possible
    pub async fn fetch_book(&self, id: &str) -> Result<Book> {
        if let Some(book) = self.cache.get(id) {
            debug!("Cache hit for volume {}", id);
            return Ok(book);
        }

        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), id);
        let volume: Volume = self
            .get_json(&url, &[], &format!("volume {}", id))
            .await?;
        let book = volume.into_book(id);

        self.cache.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    /// Search volumes and fetch full details for each hit
    ///
    /// Hits whose details cannot be fetched are logged and skipped.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Book>> {
        let params = [
            ("q", query.to_string()),
            ("maxResults", max_results.to_string()),
            ("printType", "books".to_string()),
            ("langRestrict", self.config.language.clone()),
        ];
        let list: VolumeList = self
            .get_json(&self.config.base_url, &params, &format!("search '{}'", query))
            .await?;

        let ids = list.ids();
        debug!("Search '{}' returned {} volumes", query, ids.len());

        let mut books = Vec::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            match self.fetch_book(id).await {
                Ok(book) => books.push(book),
                Err(e) => warn!("Error fetching details for book {}: {}", id, e),
            }

            if i + 1 < ids.len() && !self.config.item_delay.is_zero() {
                tokio::time::sleep(self.config.item_delay).await;
            }
        }

        Ok(books)
    }

    /// Books related to `id` by category and author, excluding `id` itself
    pub async fn similar_books(&self, id: &str, max_results: usize) -> Result<Vec<Book>> {
        let book = self.fetch_book(id).await?;
        let Some(query) = related_query(&book) else {
            debug!("Volume {} has no categories or authors to search by", id);
            return Ok(Vec::new());
        };

        let mut related = self.search(&query, max_results + 1).await?;
        related.retain(|b| b.id != id);
        related.truncate(max_results);
        Ok(related)
    }
}
