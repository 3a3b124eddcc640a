//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn invalid_identifier_error_displays_correctly() {
    let err = DbError::InvalidIdentifier {
        id: "not-a-valid-id".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid identifier: 'not-a-valid-id'");
}

#[test]
fn validation_error_displays_correctly() {
    let err = DbError::Validation {
        message: "body cannot be empty".to_string(),
    };
    assert_eq!(err.to_string(), "Validation error: body cannot be empty");
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "write concern failed".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: write concern failed");
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "server selection timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: server selection timeout");
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i32> = Err(DbError::InvalidIdentifier {
        id: "12345678".to_string(),
    });
    assert!(matches!(result, Err(DbError::InvalidIdentifier { .. })));
}
