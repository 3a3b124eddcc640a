//! MongoDB implementation of the database traits.
//!
//! This module provides a MongoDB-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod todo;

#[cfg(test)]
mod todo_test;

pub use connection::MongoDatabase;
pub use todo::MongoTodoRepository;
