//! Outbound adapters implementing the domain ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: an in-process library used by tests (`test-support`).

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod persistence;
