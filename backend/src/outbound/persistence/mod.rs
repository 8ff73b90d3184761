//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel rows and domain
//! entities and map driver failures onto the port error types. No business
//! rule lives here apart from the author-reference guard, which must share
//! the write's transaction.
//!
//! # Example
//!
//! ```ignore
//! use biblioteca::outbound::persistence::{DbPool, DieselAuthorRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/biblioteca")).await?;
//! let authors = DieselAuthorRepository::new(pool.clone());
//! ```

mod diesel_author_repository;
mod diesel_book_repository;
mod error_mapping;
mod models;
mod pool;
mod queries;
mod schema;

pub use diesel_author_repository::DieselAuthorRepository;
pub use diesel_book_repository::DieselBookRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
