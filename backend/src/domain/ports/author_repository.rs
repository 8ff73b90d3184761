//! Port for author persistence.
//!
//! [`AuthorRepository`] is the storage gateway for the `autores` table. Each
//! call checks out one connection, runs a single statement and releases the
//! connection before returning, whatever the outcome.

use async_trait::async_trait;

use crate::domain::{Author, AuthorDraft, AuthorId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by author repository adapters.
    pub enum AuthorRepositoryError {
        /// A connection could not be acquired.
        Connection { message: String } =>
            "author repository connection failed: {message}",
        /// A statement failed during execution.
        Query { message: String } =>
            "author repository query failed: {message}",
    }
}

/// Storage gateway for authors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Insert a new author and return it with the storage-assigned id.
    async fn create(&self, draft: &AuthorDraft) -> Result<Author, AuthorRepositoryError>;

    /// Every author, in storage order.
    async fn list(&self) -> Result<Vec<Author>, AuthorRepositoryError>;

    /// Look up a single author.
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, AuthorRepositoryError>;

    /// Overwrite every mutable field of `id`.
    ///
    /// Returns `false` when no row matched.
    async fn update(
        &self,
        id: AuthorId,
        draft: &AuthorDraft,
    ) -> Result<bool, AuthorRepositoryError>;

    /// Remove `id`. Books referencing it are left untouched.
    ///
    /// Returns `false` when no row matched.
    async fn delete(&self, id: AuthorId) -> Result<bool, AuthorRepositoryError>;
}
