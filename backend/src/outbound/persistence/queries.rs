//! Diesel statements shared by the repository adapters.
//!
//! Each builder returns the statement unexecuted so its SQL can be pinned
//! with [`diesel::debug_query`] without a database.

use diesel::dsl;
use diesel::prelude::*;

use crate::domain::{AuthorId, BookId};

use super::models::{AuthorValues, BookValues};
use super::schema::{autores, livros};

pub(crate) type AuthorById = dsl::Filter<autores::table, dsl::Eq<autores::id, i32>>;
pub(crate) type BookById = dsl::Filter<livros::table, dsl::Eq<livros::id, i32>>;

pub(crate) fn author_by_id(id: AuthorId) -> AuthorById {
    autores::table.filter(autores::id.eq(id.get()))
}

pub(crate) fn book_by_id(id: BookId) -> BookById {
    livros::table.filter(livros::id.eq(id.get()))
}

/// Key-only lookup used by the author-reference guard.
pub(crate) fn author_id_lookup(id: AuthorId) -> dsl::Select<AuthorById, autores::id> {
    author_by_id(id).select(autores::id)
}

pub(crate) fn insert_author(
    values: AuthorValues<'_>,
) -> dsl::Values<dsl::insert_into<autores::table>, AuthorValues<'_>> {
    diesel::insert_into(autores::table).values(values)
}

/// Full replace: optional columns are written as NULL when absent.
pub(crate) fn update_author(
    id: AuthorId,
    values: AuthorValues<'_>,
) -> dsl::Update<AuthorById, AuthorValues<'_>> {
    diesel::update(author_by_id(id)).set(values)
}

pub(crate) fn delete_author(id: AuthorId) -> dsl::delete<AuthorById> {
    diesel::delete(author_by_id(id))
}

pub(crate) fn insert_book(
    values: BookValues<'_>,
) -> dsl::Values<dsl::insert_into<livros::table>, BookValues<'_>> {
    diesel::insert_into(livros::table).values(values)
}

pub(crate) fn update_book(
    id: BookId,
    values: BookValues<'_>,
) -> dsl::Update<BookById, BookValues<'_>> {
    diesel::update(book_by_id(id)).set(values)
}

pub(crate) fn delete_book(id: BookId) -> dsl::delete<BookById> {
    diesel::delete(book_by_id(id))
}
