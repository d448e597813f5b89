use reqwest::{Client, Url};

use super::data::{Book, BookId, BookPayload};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// The Library talks to the remote book catalogue service.
/// Reads and writes may live behind different base URLs.
#[derive(Clone)]
pub struct Library {
    client: Client,
    read_base: Url,
    write_base: Url,
}

impl Library {
    /// Create a new Library client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Library {
            client,
            read_base: Self::parse_base(&config.read_base_url)?,
            write_base: Self::parse_base(&config.write_base_url)?,
        })
    }

    /// Parse a base URL, making sure it ends with a slash so `join` appends
    fn parse_base(raw: &str) -> Result<Url, ApiError> {
        let mut normalized = raw.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// URL of a single book resource under the given base
    fn book_url(base: &Url, id: &BookId) -> Result<Url, ApiError> {
        base.join(&format!("books/{}", id))
            .map_err(|e| ApiError::InvalidUrl(format!("{}books/{}: {}", base, id, e)))
    }

    /// URL used to read a book
    pub fn read_url(&self, id: &BookId) -> Result<Url, ApiError> {
        Self::book_url(&self.read_base, id)
    }

    /// URL used to write a book
    pub fn write_url(&self, id: &BookId) -> Result<Url, ApiError> {
        Self::book_url(&self.write_base, id)
    }

    /// Fetch the current state of a book.
    /// Any non-2xx status is an error.
    pub async fn fetch_book(&self, id: BookId) -> Result<Book, ApiError> {
        let url = self.read_url(&id)?;
        tracing::debug!("GET {}", url);

        let book = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Book>()
            .await?;

        Ok(book)
    }

    /// Persist edited fields of a book.
    /// The response body is ignored; a 2xx status means success.
    pub async fn update_book(&self, id: BookId, payload: BookPayload) -> Result<(), ApiError> {
        let url = self.write_url(&id)?;
        tracing::debug!("PUT {} {:?}", url, payload);

        self.client
            .put(url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

// Implement Debug without dumping the HTTP client internals
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("read_base", &self.read_base.as_str())
            .field("write_base", &self.write_base.as_str())
            .finish()
    }
}
