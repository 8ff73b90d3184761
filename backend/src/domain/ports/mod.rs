//! Domain ports: the storage gateway contracts the services depend on.
//!
//! Adapters map their failures into the typed port errors declared here so
//! services can tell infrastructure faults apart from missing rows.

mod macros;
pub(crate) use macros::define_port_error;

mod author_repository;
mod book_repository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
pub use author_repository::{AuthorRepository, AuthorRepositoryError};
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError};
