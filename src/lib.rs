//! Todo API: a small HTTP service exposing CRUD operations over todo items
//! stored in MongoDB.

pub mod api;
pub mod config;
pub mod db;
