//! Author HTTP handlers.
//!
//! ```text
//! POST   /autores {"nome":"Machado de Assis"}
//! GET    /autores
//! GET    /autores/{id}
//! PUT    /autores/{id} {"nome":"Machado de Assis","nacionalidade":"Brasileira"}
//! DELETE /autores/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AUTHOR_DELETED, Author, AuthorDraft, AuthorId, AuthorValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, blank_field_error, require};

const NAME: FieldName = FieldName::new("nome");

/// Request payload for creating or replacing an author.
///
/// Any `id` in the body is accepted and ignored; the path or the store
/// decides the identifier.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AuthorRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(rename = "nome")]
    #[schema(example = "Machado de Assis")]
    pub name: Option<String>,
    #[serde(rename = "data_nascimento")]
    #[schema(example = "1839-06-21")]
    pub birth_date: Option<String>,
    #[serde(rename = "nacionalidade")]
    #[schema(example = "Brasileira")]
    pub nationality: Option<String>,
}

/// Author as returned by the API. Absent optional fields serialise as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct AuthorResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_nascimento")]
    pub birth_date: Option<String>,
    #[serde(rename = "nacionalidade")]
    pub nationality: Option<String>,
}

impl From<Author> for AuthorResponse {
    fn from(value: Author) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            birth_date: value.birth_date,
            nationality: value.nationality,
        }
    }
}

fn map_author_validation_error(err: AuthorValidationError) -> Error {
    match err {
        AuthorValidationError::BlankName => blank_field_error(NAME),
    }
}

fn parse_author_request(payload: AuthorRequest) -> Result<AuthorDraft, Error> {
    let name = require(payload.name, NAME)?;
    AuthorDraft::new(name, payload.birth_date, payload.nationality)
        .map_err(map_author_validation_error)
}

/// Create an author.
#[utoipa::path(
    post,
    path = "/autores",
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Created author with its identifier", body = AuthorResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "createAuthor"
)]
#[post("/autores")]
pub async fn create_author(
    state: web::Data<HttpState>,
    payload: web::Json<AuthorRequest>,
) -> ApiResult<web::Json<AuthorResponse>> {
    let draft = parse_author_request(payload.into_inner())?;
    let author = state.authors.create(draft).await?;
    Ok(web::Json(AuthorResponse::from(author)))
}

/// List every author.
#[utoipa::path(
    get,
    path = "/autores",
    responses(
        (status = 200, description = "All authors", body = [AuthorResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "listAuthors"
)]
#[get("/autores")]
pub async fn list_authors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<AuthorResponse>>> {
    let authors = state.authors.list().await?;
    Ok(web::Json(
        authors.into_iter().map(AuthorResponse::from).collect(),
    ))
}

/// Fetch one author.
#[utoipa::path(
    get,
    path = "/autores/{id}",
    params(("id" = i32, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "Author", body = AuthorResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Autor não encontrado", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "getAuthor"
)]
#[get("/autores/{id}")]
pub async fn get_author(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<AuthorResponse>> {
    let author = state.authors.get(AuthorId::new(path.into_inner())).await?;
    Ok(web::Json(AuthorResponse::from(author)))
}

/// Replace every mutable field of an author.
#[utoipa::path(
    put,
    path = "/autores/{id}",
    params(("id" = i32, Path, description = "Author identifier")),
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author as submitted", body = AuthorResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Autor não encontrado", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "updateAuthor"
)]
#[put("/autores/{id}")]
pub async fn update_author(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<AuthorRequest>,
) -> ApiResult<web::Json<AuthorResponse>> {
    let id = AuthorId::new(path.into_inner());
    let draft = parse_author_request(payload.into_inner())?;
    let author = state.authors.update(id, draft).await?;
    Ok(web::Json(AuthorResponse::from(author)))
}

/// Delete an author. Books referencing it are left untouched.
#[utoipa::path(
    delete,
    path = "/autores/{id}",
    params(("id" = i32, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "Autor deletado com sucesso", body = MessageResponse),
        (status = 404, description = "Autor não encontrado", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "deleteAuthor"
)]
#[delete("/autores/{id}")]
pub async fn delete_author(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.authors.delete(AuthorId::new(path.into_inner())).await?;
    Ok(web::Json(MessageResponse::new(AUTHOR_DELETED)))
}

#[cfg(test)]
#[path = "authors_tests.rs"]
mod tests;
