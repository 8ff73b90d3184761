//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services over ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthorRepository, BookRepository};
use crate::domain::{AuthorService, BookService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub authors: AuthorService<dyn AuthorRepository>,
    pub books: BookService<dyn BookRepository>,
}

impl HttpState {
    /// Construct state from the two repository ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use biblioteca::inbound::http::state::HttpState;
    /// use biblioteca::outbound::memory::InMemoryLibrary;
    ///
    /// let library = Arc::new(InMemoryLibrary::new());
    /// let state = HttpState::new(library.clone(), library);
    /// let _books = state.books.clone();
    /// ```
    pub fn new(authors: Arc<dyn AuthorRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self {
            authors: AuthorService::new(authors),
            books: BookService::new(books),
        }
    }
}
