//! In-memory implementation of the database traits.
//!
//! Mirrors the MongoDB semantics (store-assigned ObjectId hex ids,
//! insertion-ordered scans, no-op updates/deletes on missing ids) without
//! a running server.

use std::sync::{Mutex, MutexGuard};

use mongodb::bson::oid::ObjectId;

use crate::db::{Database, DbError, DbResult, TodoId, TodoItem, TodoRepository};

/// In-memory database.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    todos: Mutex<Vec<TodoItem>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Database for InMemoryDatabase {
    type Todos<'a> = InMemoryTodoRepository<'a>;

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }

    fn todos(&self) -> Self::Todos<'_> {
        InMemoryTodoRepository { todos: &self.todos }
    }
}

/// In-memory todo repository.
pub struct InMemoryTodoRepository<'a> {
    todos: &'a Mutex<Vec<TodoItem>>,
}

impl InMemoryTodoRepository<'_> {
    fn lock(&self) -> DbResult<MutexGuard<'_, Vec<TodoItem>>> {
        self.todos.lock().map_err(|e| DbError::Database {
            message: format!("Failed to acquire store lock: {}", e),
        })
    }
}

impl TodoRepository for InMemoryTodoRepository<'_> {
    async fn list(&self) -> DbResult<Vec<TodoItem>> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, todo: &TodoItem) -> DbResult<TodoItem> {
        todo.validate()?;

        let created = TodoItem {
            id: ObjectId::new().to_hex(),
            completed: todo.completed,
            body: todo.body.clone(),
        };
        self.lock()?.push(created.clone());
        Ok(created)
    }

    async fn complete(&self, id: &TodoId) -> DbResult<()> {
        let mut todos = self.lock()?;
        if let Some(todo) = todos.iter_mut().find(|t| t.id == id.as_str()) {
            todo.completed = true;
        }
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> DbResult<()> {
        self.lock()?.retain(|t| t.id != id.as_str());
        Ok(())
    }
}
