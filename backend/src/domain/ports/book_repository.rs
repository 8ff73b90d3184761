//! Port for book persistence.
//!
//! Writes verify the author reference inside the same transaction as the
//! insert or update, so a missing author never leaves a row behind.

use async_trait::async_trait;

use crate::domain::{AuthorId, Book, BookDraft, BookId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// A connection could not be acquired.
        Connection { message: String } =>
            "book repository connection failed: {message}",
        /// A statement failed during execution.
        Query { message: String } =>
            "book repository query failed: {message}",
        /// The referenced author does not exist.
        MissingAuthor { author_id: AuthorId } =>
            "author {author_id} does not exist",
    }
}

/// Storage gateway for books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new book after confirming its author exists.
    ///
    /// Fails with [`BookRepositoryError::MissingAuthor`] and writes nothing
    /// when the author lookup finds no row.
    async fn create(&self, draft: &BookDraft) -> Result<Book, BookRepositoryError>;

    /// Every book, in storage order.
    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError>;

    /// Look up a single book.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError>;

    /// Overwrite every mutable field of `id` after confirming the author
    /// exists.
    ///
    /// Returns `false` when no book row matched.
    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<bool, BookRepositoryError>;

    /// Remove `id`. Returns `false` when no row matched.
    async fn delete(&self, id: BookId) -> Result<bool, BookRepositoryError>;
}
