//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (MongoDB, in-memory) to be
//! swapped without changing the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (TodoItem, TodoId)
//! - `repository`: Trait definitions for data access
//! - `mongo`: MongoDB implementation
//! - `memory`: In-process implementation used by tests

mod error;
mod memory;
mod models;
pub mod mongo;
mod repository;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod memory_test;

pub use error::{DbError, DbResult};
pub use memory::{InMemoryDatabase, InMemoryTodoRepository};
pub use models::*;
pub use mongo::{MongoDatabase, MongoTodoRepository};
pub use repository::*;
