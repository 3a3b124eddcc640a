//! API route configuration.

use std::path::Path;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateTodoRequest, ErrorResponse, HealthResponse, SuccessResponse, TodoResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "CRUD API for todo items backed by MongoDB",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_todos,
        handlers::create_todo,
        handlers::complete_todo,
        handlers::delete_todo,
    ),
    components(
        schemas(
            HealthResponse,
            TodoResponse,
            CreateTodoRequest,
            SuccessResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "todos", description = "Todo management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation.
///
/// When `static_dir` is given, requests that match no route are served from
/// that directory.
pub fn create_router<D: Database + 'static>(
    state: AppState<D>,
    static_dir: Option<&Path>,
) -> Router {
    let api = ApiDoc::openapi();

    // Routes split across two paths: the collection is plural, single items are not
    let todo_routes = routes!(D => {
        get "/api/todos" => handlers::list_todos,
        post "/api/todos" => handlers::create_todo,
        patch "/api/todo/{id}" => handlers::complete_todo,
        delete "/api/todo/{id}" => handlers::delete_todo,
    });

    let system_routes = routes!(D => {
        get "/health" => handlers::health,
    });

    let router = system_routes
        .merge(todo_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}
