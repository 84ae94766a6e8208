use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Google Books API key is not set (GOOGLE_BOOKS_API_KEY)")]
    MissingApiKey,

    #[error("Google Books API rate limit exceeded")]
    RateLimited,

    #[error("Google Books API returned HTTP {status} for {context}")]
    Status { status: u16, context: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
