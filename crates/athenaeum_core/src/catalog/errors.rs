/// Custom error type for everything that can fail while talking to the
/// catalog service or resolving records against local state.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport failure, non-success status or undecodable body, all
    /// originating from `reqwest`. The service draws no finer distinction.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A book id was requested that is not in the fetched list.
    #[error("unknown book (id_book={0})")]
    UnknownBook(i64),

    /// A comment id was targeted that is not in the latest comment list.
    #[error("unknown comment (id_comment={0})")]
    UnknownComment(i64),
}
