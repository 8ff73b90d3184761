//! Book use-cases.
//!
//! Writes are gated on the referenced author existing at the time of the
//! write. Later author deletions are not checked, so a stored book may point
//! at an author that no longer exists.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{AUTHOR_NOT_FOUND, Book, BookDraft, BookId, Error};

/// Message returned when a book id does not resolve.
pub const BOOK_NOT_FOUND: &str = "Livro não encontrado";

/// Confirmation returned after a book is deleted.
pub const BOOK_DELETED: &str = "Livro deletado com sucesso";

/// Book service backed by a [`BookRepository`].
pub struct BookService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for BookService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> BookService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> BookService<R>
where
    R: BookRepository + ?Sized,
{
    fn map_repository_error(error: BookRepositoryError) -> Error {
        match error {
            BookRepositoryError::MissingAuthor { author_id } => Error::not_found(AUTHOR_NOT_FOUND)
                .with_details(json!({
                    "field": "autor_id",
                    "value": author_id,
                    "code": "unknown_author",
                })),
            BookRepositoryError::Connection { message } => {
                error!(%message, "book storage connection failure");
                Error::internal(format!("book repository unavailable: {message}"))
            }
            BookRepositoryError::Query { message } => {
                error!(%message, "book storage query failure");
                Error::internal(format!("book repository error: {message}"))
            }
        }
    }

    /// Persist a new book whose author exists.
    pub async fn create(&self, draft: BookDraft) -> Result<Book, Error> {
        let book = self
            .repository
            .create(&draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(book_id = %book.id, author_id = %book.author_id, "book created");
        Ok(book)
    }

    /// All books; empty when the table is empty.
    pub async fn list(&self) -> Result<Vec<Book>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch one book or fail with `NotFound`.
    pub async fn get(&self, id: BookId) -> Result<Book, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(BOOK_NOT_FOUND))
    }

    /// Replace every field of `id` with `draft`.
    ///
    /// The author reference is re-checked, as on create.
    pub async fn update(&self, id: BookId, draft: BookDraft) -> Result<Book, Error> {
        let updated = self
            .repository
            .update(id, &draft)
            .await
            .map_err(Self::map_repository_error)?;
        if !updated {
            return Err(Error::not_found(BOOK_NOT_FOUND));
        }
        info!(book_id = %id, "book updated");
        Ok(draft.into_book(id))
    }

    /// Delete `id`, failing with `NotFound` when nothing was removed.
    pub async fn delete(&self, id: BookId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !deleted {
            return Err(Error::not_found(BOOK_NOT_FOUND));
        }
        info!(book_id = %id, "book deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "book_service_tests.rs"]
mod tests;
