//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::web;

pub mod authors;
pub mod books;
pub mod error;
pub mod health;
pub mod index;
pub mod message;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the banner and the author and book routes together with the
/// extractor configuration that maps malformed bodies and path identifiers
/// onto the API error envelope.
///
/// Handlers expect a `web::Data<HttpState>` to be registered on the app.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use biblioteca::inbound::http::{configure, state::HttpState};
/// use biblioteca::outbound::memory::InMemoryLibrary;
///
/// let library = Arc::new(InMemoryLibrary::new());
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::new(library.clone(), library)))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(index::index)
        .service(authors::create_author)
        .service(authors::list_authors)
        .service(authors::get_author)
        .service(authors::update_author)
        .service(authors::delete_author)
        .service(books::create_book)
        .service(books::list_books)
        .service(books::get_book)
        .service(books::update_book)
        .service(books::delete_book);
}
