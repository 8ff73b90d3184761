//! Author use-cases: create, list, fetch, full-replace update and delete.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::ports::{AuthorRepository, AuthorRepositoryError};
use crate::domain::{Author, AuthorDraft, AuthorId, Error};

/// Message returned when an author id does not resolve.
pub const AUTHOR_NOT_FOUND: &str = "Autor não encontrado";

/// Confirmation returned after an author is deleted.
pub const AUTHOR_DELETED: &str = "Autor deletado com sucesso";

/// Author service backed by an [`AuthorRepository`].
pub struct AuthorService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for AuthorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> AuthorService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> AuthorService<R>
where
    R: AuthorRepository + ?Sized,
{
    fn map_repository_error(error: AuthorRepositoryError) -> Error {
        error!(error = %error, "author storage failure");
        match error {
            AuthorRepositoryError::Connection { message } => {
                Error::internal(format!("author repository unavailable: {message}"))
            }
            AuthorRepositoryError::Query { message } => {
                Error::internal(format!("author repository error: {message}"))
            }
        }
    }

    /// Persist a new author.
    pub async fn create(&self, draft: AuthorDraft) -> Result<Author, Error> {
        let author = self
            .repository
            .create(&draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(author_id = %author.id, "author created");
        Ok(author)
    }

    /// All authors; empty when the table is empty.
    pub async fn list(&self) -> Result<Vec<Author>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch one author or fail with `NotFound`.
    pub async fn get(&self, id: AuthorId) -> Result<Author, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(AUTHOR_NOT_FOUND))
    }

    /// Replace every field of `id` with `draft`.
    ///
    /// Returns the submitted state under `id`.
    pub async fn update(&self, id: AuthorId, draft: AuthorDraft) -> Result<Author, Error> {
        let updated = self
            .repository
            .update(id, &draft)
            .await
            .map_err(Self::map_repository_error)?;
        if !updated {
            return Err(Error::not_found(AUTHOR_NOT_FOUND));
        }
        info!(author_id = %id, "author updated");
        Ok(draft.into_author(id))
    }

    /// Delete `id`, failing with `NotFound` when nothing was removed.
    pub async fn delete(&self, id: AuthorId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !deleted {
            return Err(Error::not_found(AUTHOR_NOT_FOUND));
        }
        info!(author_id = %id, "author deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "author_service_tests.rs"]
mod tests;
