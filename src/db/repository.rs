//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{TodoId, TodoItem},
};

/// Repository for TodoItem operations.
pub trait TodoRepository: Send + Sync {
    /// Get all todos, in the order the store yields them.
    fn list(&self) -> impl Future<Output = DbResult<Vec<TodoItem>>> + Send;

    /// Persist a new todo and return it with its assigned id.
    ///
    /// Any id already set on `todo` is ignored.
    fn create(&self, todo: &TodoItem) -> impl Future<Output = DbResult<TodoItem>> + Send;

    /// Mark a todo as completed. Succeeds without effect if no todo matches.
    fn complete(&self, id: &TodoId) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a todo. Succeeds without effect if no todo matches.
    fn delete(&self, id: &TodoId) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository
    where
        Self: 'a;

    /// Verify the backing store is reachable.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
