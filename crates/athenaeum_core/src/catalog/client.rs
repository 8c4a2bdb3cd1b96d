use crate::catalog::api::CatalogApi;
use crate::catalog::errors::CatalogError;
use crate::catalog::types::{Book, Comment, CommentEdit, CommentForm};
use async_trait::async_trait;
use core::time::Duration;
use reqwest::{ClientBuilder, header};

/// HTTP implementation of [`CatalogApi`] against the legacy query-string
/// endpoint (`?q=books`, `?q=comments`, ...). The service configures no
/// timeouts on its side and the original client set none either, so this
/// client deliberately carries none.
pub struct CatalogHttpClient {
    /// A HTTP client used to execute all requests against the catalog service
    http_client: reqwest::Client,
    /// Base endpoint URL, e.g. `https://example.com/api.php`
    base_url: String,
}

impl CatalogHttpClient {
    /// Create a new HTTP client, to be used for all subsequent catalog requests
    /// # Errors
    /// Fails if the underlying TLS backend or connection pool cannot be initialized.
    #[allow(clippy::missing_inline_in_public_items, reason = "Called once")]
    pub fn new(base_url: &str) -> Result<Self, String> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let client = ClientBuilder::new()
            .user_agent(concat!("athenaeum/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .pool_max_idle_per_host(1)
            .pool_idle_timeout(Duration::from_secs(30))
            .build();

        client
            .map(|http_client| Self {
                http_client,
                base_url: base_url.to_owned(),
            })
            .map_err(|err| format!("Failed to create HTTP request client for the catalog: {err}"))
    }

    async fn get_comments(&self, url: String) -> Result<Vec<Comment>, CatalogError> {
        let response = self.http_client.get(&url).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }
}

#[async_trait]
impl CatalogApi for CatalogHttpClient {
    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    async fn fetch_books(&self) -> Result<Vec<Book>, CatalogError> {
        let url = format!("{}?q=books", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    async fn fetch_comments(&self, book_id: i64) -> Result<Vec<Comment>, CatalogError> {
        let url = format!("{}?q=comments&id_book={book_id}", self.base_url);
        self.get_comments(url).await
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    async fn add_comment(&self, form: &CommentForm) -> Result<Vec<Comment>, CatalogError> {
        let url = format!("{}?q=add_comment", self.base_url);
        let response = self.http_client.post(&url).json(form).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    async fn edit_comment(&self, edit: &CommentEdit) -> Result<Vec<Comment>, CatalogError> {
        let url = format!("{}?q=edit_comment", self.base_url);
        let response = self.http_client.post(&url).json(edit).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    async fn delete_comment(
        &self,
        comment_id: i64,
        book_id: i64,
    ) -> Result<Vec<Comment>, CatalogError> {
        let url = format!(
            "{}?q=delete_comment&id_comment={comment_id}&id_book={book_id}",
            self.base_url
        );
        self.get_comments(url).await
    }
}
