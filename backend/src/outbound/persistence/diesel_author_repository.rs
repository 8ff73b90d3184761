//! PostgreSQL-backed `AuthorRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AuthorRepository, AuthorRepositoryError};
use crate::domain::{Author, AuthorDraft, AuthorId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AuthorRow, AuthorValues};
use super::pool::DbPool;
use super::queries::{author_by_id, delete_author, insert_author, update_author};
use super::schema::autores;

/// Diesel-backed author storage.
///
/// # Examples
///
/// ```rust,no_run
/// use biblioteca::outbound::persistence::{DbPool, DieselAuthorRepository, PoolConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/biblioteca")).await?;
/// let repository = DieselAuthorRepository::new(pool);
/// # let _ = repository;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DieselAuthorRepository {
    pool: DbPool,
}

impl DieselAuthorRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for DieselAuthorRepository {
    async fn create(&self, draft: &AuthorDraft) -> Result<Author, AuthorRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let id: i32 = insert_author(AuthorValues::from(draft))
            .returning(autores::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(draft.clone().into_author(AuthorId::new(id)))
    }

    async fn list(&self) -> Result<Vec<Author>, AuthorRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let rows: Vec<AuthorRow> = autores::table
            .select(AuthorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, AuthorRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let row: Option<AuthorRow> = author_by_id(id)
            .select(AuthorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Author::from))
    }

    async fn update(
        &self,
        id: AuthorId,
        draft: &AuthorDraft,
    ) -> Result<bool, AuthorRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let affected = update_author(id, AuthorValues::from(draft))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: AuthorId) -> Result<bool, AuthorRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let affected = delete_author(id)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
