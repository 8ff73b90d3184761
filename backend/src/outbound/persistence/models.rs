//! Diesel row structs.
//!
//! Persistence-layer details: rows are converted field by field into domain
//! entities and never leave this module tree.

use diesel::prelude::*;

use crate::domain::{Author, AuthorDraft, AuthorId, Book, BookDraft, BookId};

use super::schema::{autores, livros};

/// Row read from `autores`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = autores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AuthorRow {
    pub id: i32,
    pub nome: String,
    pub data_nascimento: Option<String>,
    pub nacionalidade: Option<String>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: AuthorId::new(row.id),
            name: row.nome,
            birth_date: row.data_nascimento,
            nationality: row.nacionalidade,
        }
    }
}

/// Insertable and changeset view of an author draft.
///
/// `treat_none_as_null` makes full-replace updates clear optional columns
/// instead of skipping them.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = autores)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct AuthorValues<'a> {
    pub nome: &'a str,
    pub data_nascimento: Option<&'a str>,
    pub nacionalidade: Option<&'a str>,
}

impl<'a> From<&'a AuthorDraft> for AuthorValues<'a> {
    fn from(draft: &'a AuthorDraft) -> Self {
        Self {
            nome: draft.name(),
            data_nascimento: draft.birth_date(),
            nacionalidade: draft.nationality(),
        }
    }
}

/// Row read from `livros`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = livros)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i32,
    pub titulo: String,
    pub autor_id: i32,
    pub ano_publicacao: i32,
    pub genero: Option<String>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::new(row.id),
            title: row.titulo,
            author_id: AuthorId::new(row.autor_id),
            publication_year: row.ano_publicacao,
            genre: row.genero,
        }
    }
}

/// Insertable and changeset view of a book draft.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = livros)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct BookValues<'a> {
    pub titulo: &'a str,
    pub autor_id: i32,
    pub ano_publicacao: i32,
    pub genero: Option<&'a str>,
}

impl<'a> From<&'a BookDraft> for BookValues<'a> {
    fn from(draft: &'a BookDraft) -> Self {
        Self {
            titulo: draft.title(),
            autor_id: draft.author_id().get(),
            ano_publicacao: draft.publication_year(),
            genero: draft.genre(),
        }
    }
}
