//! Todo management handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, db_error, error_response};
use crate::api::AppState;
use crate::db::{Database, TodoId, TodoItem, TodoRepository};

// =============================================================================
// DTOs
// =============================================================================

/// Todo response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    /// Store-assigned identifier (24-character hex)
    #[serde(rename = "_id")]
    #[schema(example = "65a1f0c2b3d4e5f607182930")]
    pub id: String,
    #[schema(example = false)]
    pub completed: bool,
    #[schema(example = "buy milk")]
    pub body: String,
}

impl From<TodoItem> for TodoResponse {
    fn from(t: TodoItem) -> Self {
        Self {
            id: t.id,
            completed: t.completed,
            body: t.body,
        }
    }
}

/// Create todo request DTO
///
/// A client-supplied `_id` is accepted in the payload but ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[serde(default)]
    #[schema(example = "buy milk")]
    pub body: String,
    /// Defaults to false
    #[serde(default)]
    pub completed: bool,
}

/// Acknowledgement for mutations without a response body
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

impl SuccessResponse {
    fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Undecodable path segments (e.g. invalid percent-encoding) are reported
/// the same way as malformed ids.
fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<TodoId, HandlerError> {
    let Path(id) =
        path.map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid todo ID"))?;
    TodoId::parse(&id).map_err(db_error)
}

// =============================================================================
// Handlers
// =============================================================================

/// List all todos
#[utoipa::path(
    get,
    path = "/api/todos",
    tag = "todos",
    responses(
        (status = 200, description = "All todos in storage order", body = Vec<TodoResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TodoResponse>>, HandlerError> {
    let repo = state.db().todos();
    let todos = repo.list().await.map_err(db_error)?;

    debug!(count = todos.len(), "listed todos");
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Create a todo
#[utoipa::path(
    post,
    path = "/api/todos",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Empty body or malformed JSON", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_todo<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), HandlerError> {
    let Json(req) = payload.map_err(|e| error_response(StatusCode::BAD_REQUEST, e.body_text()))?;

    if req.body.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Todo body cannot be empty",
        ));
    }

    let todo = TodoItem {
        id: String::new(), // Store assigns the id
        completed: req.completed,
        body: req.body,
    };

    let repo = state.db().todos();
    let created = repo.create(&todo).await.map_err(db_error)?;

    debug!(id = %created.id, "created todo");
    Ok((StatusCode::CREATED, Json(TodoResponse::from(created))))
}

/// Mark a todo as completed
///
/// Succeeds even if no todo has the given id.
#[utoipa::path(
    patch,
    path = "/api/todo/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "Todo ID (24-character hex)")),
    responses(
        (status = 200, description = "Todo completed", body = SuccessResponse),
        (status = 400, description = "Invalid todo ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn complete_todo<D: Database>(
    State(state): State<AppState<D>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    let id = parse_id(path)?;

    let repo = state.db().todos();
    repo.complete(&id).await.map_err(db_error)?;

    Ok(SuccessResponse::ok())
}

/// Delete a todo
///
/// Succeeds even if no todo has the given id.
#[utoipa::path(
    delete,
    path = "/api/todo/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "Todo ID (24-character hex)")),
    responses(
        (status = 200, description = "Todo deleted", body = SuccessResponse),
        (status = 400, description = "Invalid todo ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo<D: Database>(
    State(state): State<AppState<D>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    let id = parse_id(path)?;

    let repo = state.db().todos();
    repo.delete(&id).await.map_err(db_error)?;

    Ok(SuccessResponse::ok())
}
