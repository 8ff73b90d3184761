//! Book HTTP handlers.
//!
//! ```text
//! POST   /livros {"titulo":"Dom Casmurro","autor_id":1,"ano_publicacao":1899}
//! GET    /livros
//! GET    /livros/{id}
//! PUT    /livros/{id} {"titulo":"Dom Casmurro","autor_id":1,"ano_publicacao":1900}
//! DELETE /livros/{id}
//! ```
//!
//! Writes that name an author which does not exist answer 404 with the
//! author-not-found message.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AuthorId, BOOK_DELETED, Book, BookDraft, BookId, BookValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, blank_field_error, require};

const TITLE: FieldName = FieldName::new("titulo");
const AUTHOR_ID: FieldName = FieldName::new("autor_id");
const PUBLICATION_YEAR: FieldName = FieldName::new("ano_publicacao");

/// Request payload for creating or replacing a book.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct BookRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(rename = "titulo")]
    #[schema(example = "Dom Casmurro")]
    pub title: Option<String>,
    #[serde(rename = "autor_id")]
    #[schema(example = 1)]
    pub author_id: Option<i32>,
    #[serde(rename = "ano_publicacao")]
    #[schema(example = 1899)]
    pub publication_year: Option<i32>,
    #[serde(rename = "genero")]
    #[schema(example = "Romance")]
    pub genre: Option<String>,
}

/// Book as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor_id")]
    pub author_id: i32,
    #[serde(rename = "ano_publicacao")]
    pub publication_year: i32,
    #[serde(rename = "genero")]
    pub genre: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        Self {
            id: value.id.get(),
            title: value.title,
            author_id: value.author_id.get(),
            publication_year: value.publication_year,
            genre: value.genre,
        }
    }
}

fn map_book_validation_error(err: BookValidationError) -> Error {
    match err {
        BookValidationError::BlankTitle => blank_field_error(TITLE),
    }
}

fn parse_book_request(payload: BookRequest) -> Result<BookDraft, Error> {
    let title = require(payload.title, TITLE)?;
    let author_id = require(payload.author_id, AUTHOR_ID)?;
    let publication_year = require(payload.publication_year, PUBLICATION_YEAR)?;
    BookDraft::new(
        title,
        AuthorId::new(author_id),
        publication_year,
        payload.genre,
    )
    .map_err(map_book_validation_error)
}

/// Create a book for an existing author.
#[utoipa::path(
    post,
    path = "/livros",
    request_body = BookRequest,
    responses(
        (status = 200, description = "Created book with its identifier", body = BookResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Autor não encontrado", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("/livros")]
pub async fn create_book(
    state: web::Data<HttpState>,
    payload: web::Json<BookRequest>,
) -> ApiResult<web::Json<BookResponse>> {
    let draft = parse_book_request(payload.into_inner())?;
    let book = state.books.create(draft).await?;
    Ok(web::Json(BookResponse::from(book)))
}

/// List every book.
#[utoipa::path(
    get,
    path = "/livros",
    responses(
        (status = 200, description = "All books", body = [BookResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/livros")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BookResponse>>> {
    let books = state.books.list().await?;
    Ok(web::Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Fetch one book.
#[utoipa::path(
    get,
    path = "/livros/{id}",
    params(("id" = i32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book", body = BookResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Livro não encontrado", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/livros/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<BookResponse>> {
    let book = state.books.get(BookId::new(path.into_inner())).await?;
    Ok(web::Json(BookResponse::from(book)))
}

/// Replace every mutable field of a book.
#[utoipa::path(
    put,
    path = "/livros/{id}",
    params(("id" = i32, Path, description = "Book identifier")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book as submitted", body = BookResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Book or referenced author not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/livros/{id}")]
pub async fn update_book(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<BookRequest>,
) -> ApiResult<web::Json<BookResponse>> {
    let id = BookId::new(path.into_inner());
    let draft = parse_book_request(payload.into_inner())?;
    let book = state.books.update(id, draft).await?;
    Ok(web::Json(BookResponse::from(book)))
}

/// Delete a book.
#[utoipa::path(
    delete,
    path = "/livros/{id}",
    params(("id" = i32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Livro deletado com sucesso", body = MessageResponse),
        (status = 404, description = "Livro não encontrado", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/livros/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.books.delete(BookId::new(path.into_inner())).await?;
    Ok(web::Json(MessageResponse::new(BOOK_DELETED)))
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;
