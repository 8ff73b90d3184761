//! PostgreSQL-backed `BookRepository` implementation using Diesel.
//!
//! Create and update run the author lookup and the write on one connection
//! inside one transaction; a missing author rolls nothing forward.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{AuthorId, Book, BookDraft, BookId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookRow, BookValues};
use super::pool::DbPool;
use super::queries::{author_id_lookup, book_by_id, delete_book, insert_book, update_book};
use super::schema::livros;

/// Result of a guarded write, decided inside the transaction.
enum GuardedWrite<T> {
    Written(T),
    MissingAuthor,
}

/// Diesel-backed book storage.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn author_exists(
    conn: &mut AsyncPgConnection,
    author_id: AuthorId,
) -> Result<bool, diesel::result::Error> {
    author_id_lookup(author_id)
        .first::<i32>(conn)
        .await
        .optional()
        .map(|found| found.is_some())
}

fn resolve<T>(outcome: GuardedWrite<T>, author_id: AuthorId) -> Result<T, BookRepositoryError> {
    match outcome {
        GuardedWrite::Written(value) => Ok(value),
        GuardedWrite::MissingAuthor => Err(BookRepositoryError::missing_author(author_id)),
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn create(&self, draft: &BookDraft) -> Result<Book, BookRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;
        let author_id = draft.author_id();
        let values = BookValues::from(draft);

        let outcome: GuardedWrite<i32> = conn
            .transaction(|conn| {
                async move {
                    if !author_exists(conn, author_id).await? {
                        return Ok(GuardedWrite::MissingAuthor);
                    }
                    let id = insert_book(values)
                        .returning(livros::id)
                        .get_result::<i32>(conn)
                        .await?;
                    Ok(GuardedWrite::Written(id))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        let id = resolve(outcome, author_id)?;
        Ok(draft.clone().into_book(BookId::new(id)))
    }

    async fn list(&self) -> Result<Vec<Book>, BookRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let rows: Vec<BookRow> = livros::table
            .select(BookRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let row: Option<BookRow> = book_by_id(id)
            .select(BookRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Book::from))
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<bool, BookRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;
        let author_id = draft.author_id();
        let values = BookValues::from(draft);

        let outcome: GuardedWrite<bool> = conn
            .transaction(|conn| {
                async move {
                    if !author_exists(conn, author_id).await? {
                        return Ok(GuardedWrite::MissingAuthor);
                    }
                    let affected = update_book(id, values)
                        .execute(conn)
                        .await?;
                    Ok(GuardedWrite::Written(affected > 0))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        resolve(outcome, author_id)
    }

    async fn delete(&self, id: BookId) -> Result<bool, BookRepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_pool_error)?;

        let affected = delete_book(id)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
