//! Tests for the MongoDB document mapping.

use mongodb::bson::{self, doc, oid::ObjectId};

use super::todo::{TodoDocument, object_id};
use crate::db::{TodoId, TodoItem};

#[test]
fn insert_document_never_carries_client_id() {
    let todo = TodoItem {
        id: "65a1f0c2b3d4e5f607182930".to_string(),
        completed: true,
        body: "buy milk".to_string(),
    };

    let document = bson::to_document(&TodoDocument::for_insert(&todo)).unwrap();

    assert_eq!(document, doc! { "completed": true, "body": "buy milk" });
}

#[test]
fn stored_document_converts_to_item_with_hex_id() {
    let oid = ObjectId::parse_str("65a1f0c2b3d4e5f607182930").unwrap();
    let document: TodoDocument =
        bson::from_document(doc! { "_id": oid, "completed": false, "body": "x" }).unwrap();

    let item = TodoItem::from(document);

    assert_eq!(item.id, "65a1f0c2b3d4e5f607182930");
    assert!(!item.completed);
    assert_eq!(item.body, "x");
}

#[test]
fn stored_document_without_completed_defaults_to_false() {
    let document: TodoDocument =
        bson::from_document(doc! { "_id": ObjectId::new(), "body": "x" }).unwrap();

    assert!(!document.completed);
}

#[test]
fn todo_id_converts_to_object_id() {
    let id = TodoId::parse("65A1F0C2B3D4E5F607182930").unwrap();

    let oid = object_id(&id).unwrap();

    assert_eq!(oid.to_hex(), "65a1f0c2b3d4e5f607182930");
}
