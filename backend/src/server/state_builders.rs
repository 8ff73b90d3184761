//! Builders wiring the Diesel repositories into HTTP state.

use std::sync::Arc;

use actix_web::web;

use biblioteca::inbound::http::state::HttpState;
use biblioteca::outbound::persistence::{DbPool, DieselAuthorRepository, DieselBookRepository};

/// Build handler state backed by PostgreSQL.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(DieselAuthorRepository::new(pool.clone())),
        Arc::new(DieselBookRepository::new(pool.clone())),
    ))
}
