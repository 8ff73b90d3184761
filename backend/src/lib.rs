//! Authors and books CRUD service library.
//!
//! The binary in `main.rs` wires these modules into an Actix server; the
//! library surface exists so integration tests and tooling can build the
//! same application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
