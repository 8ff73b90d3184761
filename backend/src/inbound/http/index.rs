//! Root banner.

use actix_web::{HttpResponse, get, http::header::ContentType};

/// Text served at `/`.
pub const BANNER: &str = "Minha CRUD da Biblioteca";

/// Identify the service.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = String, content_type = "text/plain")),
    tags = ["health"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(BANNER)
}
