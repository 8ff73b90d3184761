//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{AuthorRepository, BookRepository};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryLibrary;

/// App wired like production over the given ports.
pub fn test_app_with(
    authors: Arc<dyn AuthorRepository>,
    books: Arc<dyn BookRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(authors, books)))
        .wrap(Trace)
        .configure(configure)
}

/// App over a shared in-memory library.
///
/// The returned app holds its own handle to the library's shelves, so it
/// does not borrow `library`.
pub fn test_app(
    library: &InMemoryLibrary,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let library = Arc::new(library.clone());
    test_app_with(library.clone(), library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn app_outlives_a_temporary_library() {
        let app = test::init_service(test_app(&InMemoryLibrary::new())).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/autores").to_request())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
