//! Domain entities, validation and use-case services.
//!
//! Purpose: hold the rules that decide whether an author or book write is
//! acceptable and how storage outcomes turn into API errors. Nothing in here
//! knows about HTTP or Diesel; adapters reach the services through the
//! [`ports`].
//!
//! Public surface:
//! - [`Author`], [`AuthorDraft`], [`AuthorId`] and the book equivalents.
//! - [`AuthorService`] / [`BookService`] implementing the five resource
//!   operations.
//! - [`Error`] / [`ErrorCode`] for every failure surfaced to adapters.
//! - [`TraceId`] for request correlation.

pub mod author;
pub mod author_service;
pub mod book;
pub mod book_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::author::{Author, AuthorDraft, AuthorId, AuthorValidationError};
pub use self::author_service::{AUTHOR_DELETED, AUTHOR_NOT_FOUND, AuthorService};
pub use self::book::{Book, BookDraft, BookId, BookValidationError};
pub use self::book_service::{BOOK_DELETED, BOOK_NOT_FOUND, BookService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
