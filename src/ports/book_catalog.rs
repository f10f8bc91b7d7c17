use crate::domain::{Book, BookId, NewBook};
use async_trait::async_trait;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Store-level failure, classified by the adapter.
///
/// The adapter decides which side of the connection the failure happened on;
/// callers only ever see the classification plus an opaque source.
#[derive(Debug, Error)]
pub enum StoreFailure {
    /// The operation's connection could not be established.
    #[error("store unavailable")]
    Unavailable(#[source] BoxError),

    /// The connection was open but the statement or row decoding failed.
    #[error("store operation failed")]
    Failed(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, StoreFailure>;

/// Book catalog port: the durable store behind the Catalog Store operations.
///
/// Every method is a single request/response round trip. Implementations
/// must not hold connections, cursors or transactions across calls.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Read the full record set in storage order.
    async fn fetch_all(&self) -> Result<Vec<Book>>;

    /// Read the records whose title contains `term`, ignoring case.
    ///
    /// `term` is already validated as non-blank by the caller.
    async fn fetch_by_title(&self, term: &str) -> Result<Vec<Book>>;

    /// Insert a single row and return it with the identity the store assigned.
    async fn insert(&self, book: &NewBook) -> Result<Book>;

    /// Replace all mutable fields of the row keyed by `id`.
    ///
    /// Returns the affected-row count; zero means no such row.
    async fn update(&self, id: BookId, book: &NewBook) -> Result<u64>;

    /// Delete the row keyed by `id`.
    ///
    /// Returns the affected-row count; zero means no such row.
    async fn delete(&self, id: BookId) -> Result<u64>;
}
