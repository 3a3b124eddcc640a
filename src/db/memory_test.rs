//! Tests for the in-memory todo repository.

use crate::db::{Database, DbError, InMemoryDatabase, TodoId, TodoItem, TodoRepository};

const MISSING_ID: &str = "000000000000000000000000";

#[tokio::test]
async fn create_assigns_hex_id_and_defaults_completed() {
    let db = InMemoryDatabase::new();

    let created = db.todos().create(&TodoItem::new("buy milk")).await.unwrap();

    assert!(TodoId::parse(&created.id).is_ok());
    assert!(!created.completed);
    assert_eq!(created.body, "buy milk");
}

#[tokio::test]
async fn create_ignores_caller_supplied_id() {
    let db = InMemoryDatabase::new();
    let todo = TodoItem {
        id: MISSING_ID.to_string(),
        completed: false,
        body: "x".to_string(),
    };

    let created = db.todos().create(&todo).await.unwrap();

    assert_ne!(created.id, MISSING_ID);
}

#[tokio::test]
async fn create_rejects_empty_body() {
    let db = InMemoryDatabase::new();

    let err = db.todos().create(&TodoItem::new("")).await.unwrap_err();

    assert!(matches!(err, DbError::Validation { .. }));
    assert!(db.todos().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_items_in_insertion_order() {
    let db = InMemoryDatabase::new();
    for body in ["first", "second", "third"] {
        db.todos().create(&TodoItem::new(body)).await.unwrap();
    }

    let bodies: Vec<String> = db
        .todos()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.body)
        .collect();

    assert_eq!(bodies, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn complete_is_idempotent() {
    let db = InMemoryDatabase::new();
    let created = db.todos().create(&TodoItem::new("x")).await.unwrap();
    let id = TodoId::parse(&created.id).unwrap();

    db.todos().complete(&id).await.unwrap();
    db.todos().complete(&id).await.unwrap();

    let todos = db.todos().list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert!(todos[0].completed);
}

#[tokio::test]
async fn complete_and_delete_on_missing_id_are_noops() {
    let db = InMemoryDatabase::new();
    db.todos().create(&TodoItem::new("keep me")).await.unwrap();
    let missing = TodoId::parse(MISSING_ID).unwrap();

    db.todos().complete(&missing).await.unwrap();
    db.todos().delete(&missing).await.unwrap();

    let todos = db.todos().list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert!(!todos[0].completed);
}

#[tokio::test]
async fn delete_removes_only_matching_item() {
    let db = InMemoryDatabase::new();
    let a = db.todos().create(&TodoItem::new("a")).await.unwrap();
    db.todos().create(&TodoItem::new("b")).await.unwrap();

    db.todos().delete(&TodoId::parse(&a.id).unwrap()).await.unwrap();

    let todos = db.todos().list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].body, "b");
}
