//! MongoDB TodoRepository implementation.

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult, TodoId, TodoItem, TodoRepository};

/// Stored shape of a todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ObjectId>,
    #[serde(default)]
    pub(crate) completed: bool,
    #[serde(default)]
    pub(crate) body: String,
}

impl TodoDocument {
    /// Document for insertion. The server assigns `_id`.
    pub(crate) fn for_insert(todo: &TodoItem) -> Self {
        Self {
            id: None,
            completed: todo.completed,
            body: todo.body.clone(),
        }
    }
}

impl From<TodoDocument> for TodoItem {
    fn from(d: TodoDocument) -> Self {
        Self {
            id: d.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            completed: d.completed,
            body: d.body,
        }
    }
}

pub(crate) fn object_id(id: &TodoId) -> DbResult<ObjectId> {
    ObjectId::parse_str(id.as_str()).map_err(|_| DbError::InvalidIdentifier {
        id: id.to_string(),
    })
}

fn database_error(e: mongodb::error::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

/// MongoDB-backed todo repository.
pub struct MongoTodoRepository<'a> {
    pub(crate) collection: &'a Collection<TodoDocument>,
}

impl TodoRepository for MongoTodoRepository<'_> {
    async fn list(&self) -> DbResult<Vec<TodoItem>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(database_error)?;

        // The cursor is dropped (and killed server-side) on every return path.
        let mut todos = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(database_error)? {
            todos.push(TodoItem::from(document));
        }

        Ok(todos)
    }

    async fn create(&self, todo: &TodoItem) -> DbResult<TodoItem> {
        todo.validate()?;

        let mut document = TodoDocument::for_insert(todo);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(database_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DbError::Database {
                message: format!("Unexpected inserted id: {}", result.inserted_id),
            })?;
        document.id = Some(id);

        Ok(TodoItem::from(document))
    }

    async fn complete(&self, id: &TodoId) -> DbResult<()> {
        let oid = object_id(id)?;

        self.collection
            .update_one(doc! { "_id": oid }, doc! { "$set": { "completed": true } })
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> DbResult<()> {
        let oid = object_id(id)?;

        self.collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
