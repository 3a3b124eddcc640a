//! Domain models for the todo store.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DbError, DbResult};

/// Length of the hex encoding of a store-assigned identifier.
pub const ID_HEX_LEN: usize = 24;

/// Validated todo identifier (24 lowercase hex characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// Parse an identifier from its hex representation.
    pub fn parse(s: &str) -> DbResult<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TodoId {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DbError::InvalidIdentifier { id: s.to_string() });
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item.
///
/// `id` is empty until the store assigns one, and is then serialized as `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub body: String,
}

impl TodoItem {
    /// New, not-yet-persisted item.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            completed: false,
            body: body.into(),
        }
    }

    /// Check the invariants required before an item may be persisted.
    pub fn validate(&self) -> DbResult<()> {
        if self.body.is_empty() {
            return Err(DbError::Validation {
                message: "Todo body cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
