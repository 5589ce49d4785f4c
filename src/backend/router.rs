//! Route configuration for the application.
//! Wires the API routes to their handlers and shares the store with them.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers_task::{get_task, list_tasks};
use crate::backend::handlers_user::{create_user, get_user, list_users};
use crate::database::Store;

/// Builds the application router around a shared store.
pub fn get_router(store: Arc<Store>) -> Router {
    let router = Router::new().merge(api_routes()).with_state(store);

    // Allow requests from any origin (in debug mode only)
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// The versioned API surface
fn api_routes() -> Router<Arc<Store>> {
    Router::new()
        .route("/api/v1/user/add", post(create_user)) // Validate and admit a user
        .route("/api/v1/user/:id", get(get_user)) // Fetch one user
        .route("/api/v1/users", get(list_users)) // List users by id
        .route("/api/v1/task/:id", get(get_task)) // Fetch one task
        .route("/api/v1/tasks", get(list_tasks)) // List tasks by id
}
