//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the request/response DTOs and the domain error wrappers
//! ([`ErrorSchema`], [`ErrorCodeSchema`]). The generated document backs
//! Swagger UI in debug builds and is printed by `openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::authors::{AuthorRequest, AuthorResponse};
use crate::inbound::http::books::{BookRequest, BookResponse};
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        description = "CRUD access to authors (autores) and books (livros)."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::authors::create_author,
        crate::inbound::http::authors::list_authors,
        crate::inbound::http::authors::get_author,
        crate::inbound::http::authors::update_author,
        crate::inbound::http::authors::delete_author,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AuthorRequest,
        AuthorResponse,
        BookRequest,
        BookResponse,
        MessageResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "authors", description = "Authors (autores)"),
        (name = "books", description = "Books (livros) and their author reference"),
        (name = "health", description = "Banner and health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/autores")]
    #[case("/autores/{id}")]
    #[case("/livros")]
    #[case("/livros/{id}")]
    #[case("/health/ready")]
    fn document_lists_resource_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn book_schema_uses_wire_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let book = schemas.get("BookResponse").expect("BookResponse schema");

        for field in ["id", "titulo", "autor_id", "ano_publicacao", "genero"] {
            assert_object_schema_has_field(book, field);
        }
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }
}
