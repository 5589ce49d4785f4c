//! Handlers for the task endpoints.
//! Tasks are exposed read-only: there are no validation rules for a task
//! write path yet.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use http::StatusCode;
use serde_json::json;

use crate::database::{Store, Task};
use crate::utils::error_messages::INTERNAL_ERROR;
use crate::utils::response::{
    internal_error_response, not_found_response, success_response, ApiResponse,
};

/// Fetches a single task by id.
pub async fn get_task(
    State(store): State<Arc<Store>>,
    Path(id): Path<u64>,
) -> axum::response::Result<(StatusCode, Json<ApiResponse>)> {
    let tasks = store
        .tasks()
        .map_err(|_| internal_error_response(INTERNAL_ERROR))?;

    match tasks.get(id) {
        Some(task) => Ok(success_response(
            "Task retrieved successfully",
            json!(task),
            StatusCode::OK,
        )),
        None => Ok(not_found_response(&format!(
            "Task with id '{}' not found",
            id
        ))),
    }
}

/// Lists every task, ordered by id.
pub async fn list_tasks(
    State(store): State<Arc<Store>>,
) -> axum::response::Result<(StatusCode, Json<ApiResponse>)> {
    let tasks = store
        .tasks()
        .map_err(|_| internal_error_response(INTERNAL_ERROR))?;

    let mut listing: Vec<&Task> = tasks.records().values().collect();
    listing.sort_by_key(|task| task.id);

    Ok(success_response(
        "Tasks retrieved successfully",
        json!(listing),
        StatusCode::OK,
    ))
}
