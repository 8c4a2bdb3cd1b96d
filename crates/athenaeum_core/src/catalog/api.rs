use crate::catalog::errors::CatalogError;
use crate::catalog::types::{Book, Comment, CommentEdit, CommentForm};
use async_trait::async_trait;

/// The wire operations of the catalog service. Every mutation returns the
/// server's full updated comment list, which callers must treat as the new
/// authoritative state.
#[async_trait]
pub trait CatalogApi: Sync + Send {
    /// Fetch the complete book list, in the order the server defines.
    /// # Errors
    /// Fails if the request, the response status or the body decode fails.
    async fn fetch_books(&self) -> Result<Vec<Book>, CatalogError>;

    /// Fetch all comments for one book.
    /// # Errors
    /// Fails if the request, the response status or the body decode fails.
    async fn fetch_comments(&self, book_id: i64) -> Result<Vec<Comment>, CatalogError>;

    /// Add a comment and return the updated comment list for its book.
    /// # Errors
    /// Fails if the request, the response status or the body decode fails.
    async fn add_comment(&self, form: &CommentForm) -> Result<Vec<Comment>, CatalogError>;

    /// Replace a comment's body and return the updated comment list.
    /// # Errors
    /// Fails if the request, the response status or the body decode fails.
    async fn edit_comment(&self, edit: &CommentEdit) -> Result<Vec<Comment>, CatalogError>;

    /// Delete a comment and return the comments remaining on its book.
    /// # Errors
    /// Fails if the request, the response status or the body decode fails.
    async fn delete_comment(
        &self,
        comment_id: i64,
        book_id: i64,
    ) -> Result<Vec<Comment>, CatalogError>;
}
