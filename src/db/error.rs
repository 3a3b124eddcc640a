//! Database error types.
//!
//! This module provides abstracted error types for store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Invalid identifier: '{id}'")]
    #[diagnostic(
        code(todo_api::db::invalid_identifier),
        help("Identifiers are 24-character hexadecimal strings")
    )]
    InvalidIdentifier { id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(todo_api::db::validation_error))]
    Validation { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(todo_api::db::database_error))]
    Database { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todo_api::db::connection_error),
        help("Check that MONGODB_URI points at a reachable MongoDB deployment")
    )]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
