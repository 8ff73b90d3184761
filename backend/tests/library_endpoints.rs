//! End-to-end behaviour of the author and book endpoints over the in-memory
//! library.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use biblioteca::Trace;
use biblioteca::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use biblioteca::inbound::http::configure;
use biblioteca::inbound::http::state::HttpState;
use biblioteca::outbound::memory::InMemoryLibrary;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn library() -> InMemoryLibrary {
    InMemoryLibrary::new()
}

async fn init(
    library: &InMemoryLibrary,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> + use<>
{
    let shared = Arc::new(library.clone());
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(shared.clone(), shared)))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: test::TestRequest,
) -> (StatusCode, Value) {
    let res = test::call_service(app, request.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[rstest]
#[actix_web::test]
async fn author_lifecycle_matches_documented_scenario(library: InMemoryLibrary) {
    let app = init(&library).await;

    let (status, created) = send(
        &app,
        test::TestRequest::post()
            .uri("/autores")
            .set_json(json!({"nome": "Machado de Assis"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        created,
        json!({"id": 1, "nome": "Machado de Assis", "data_nascimento": null, "nacionalidade": null})
    );

    let (status, fetched) = send(&app, test::TestRequest::get().uri("/autores/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, deleted) = send(&app, test::TestRequest::delete().uri("/autores/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"message": "Autor deletado com sucesso"}));

    let (status, missing) = send(&app, test::TestRequest::get().uri("/autores/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["code"], json!("not_found"));
    assert_eq!(missing["message"], json!("Autor não encontrado"));
}

#[rstest]
#[actix_web::test]
async fn book_keeps_reference_to_its_author(library: InMemoryLibrary) {
    let app = init(&library).await;
    let (_, author) = send(
        &app,
        test::TestRequest::post()
            .uri("/autores")
            .set_json(json!({"nome": "Graciliano Ramos", "nacionalidade": "Brasileira"})),
    )
    .await;

    let (status, book) = send(
        &app,
        test::TestRequest::post().uri("/livros").set_json(json!({
            "titulo": "Vidas Secas",
            "autor_id": author["id"],
            "ano_publicacao": 1938,
            "genero": "Romance"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/livros/{}", book["id"]);
    let (_, fetched) = send(&app, test::TestRequest::get().uri(&uri)).await;
    assert_eq!(fetched["autor_id"], author["id"]);
    assert_eq!(fetched["genero"], json!("Romance"));
}

#[rstest]
#[actix_web::test]
async fn book_for_missing_author_is_not_inserted(library: InMemoryLibrary) {
    let app = init(&library).await;

    let (status, error) = send(
        &app,
        test::TestRequest::post().uri("/livros").set_json(json!({
            "titulo": "Memórias Póstumas de Brás Cubas",
            "autor_id": 404,
            "ano_publicacao": 1881
        })),
    )
    .await;
    let (_, books) = send(&app, test::TestRequest::get().uri("/livros")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], json!("Autor não encontrado"));
    assert_eq!(books, json!([]));
}

#[rstest]
#[actix_web::test]
async fn deleting_an_author_leaves_its_books(library: InMemoryLibrary) {
    let app = init(&library).await;
    send(
        &app,
        test::TestRequest::post()
            .uri("/autores")
            .set_json(json!({"nome": "Aluísio Azevedo"})),
    )
    .await;
    send(
        &app,
        test::TestRequest::post().uri("/livros").set_json(json!({
            "titulo": "O Cortiço",
            "autor_id": 1,
            "ano_publicacao": 1890
        })),
    )
    .await;

    send(&app, test::TestRequest::delete().uri("/autores/1")).await;
    let (status, book) = send(&app, test::TestRequest::get().uri("/livros/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["autor_id"], json!(1));
}

#[rstest]
#[actix_web::test]
async fn update_of_missing_book_leaves_storage_unchanged(library: InMemoryLibrary) {
    let app = init(&library).await;
    send(
        &app,
        test::TestRequest::post()
            .uri("/autores")
            .set_json(json!({"nome": "Euclides da Cunha"})),
    )
    .await;

    let (status, _) = send(
        &app,
        test::TestRequest::put().uri("/livros/1").set_json(json!({
            "titulo": "Os Sertões",
            "autor_id": 1,
            "ano_publicacao": 1902
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(library.book_count(), 0);
}

#[rstest]
#[actix_web::test]
async fn unreachable_store_reports_redacted_internal_errors() {
    let app = init(&InMemoryLibrary::unavailable()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/autores")
            .set_json(json!({"nome": "Lima Barreto"}))
            .to_request(),
    )
    .await;
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: Error = test::read_body_json(res).await;

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Internal server error");
    assert_eq!(error.trace_id().map(str::to_owned), header);
}
