//! Task Endpoints
//!
//! # Endpoints
//!
//! - `GET /health` - Health check endpoint
//! - `GET /tasks` - List all tasks
//! - `POST /tasks` - Create a task
//! - `GET /tasks/:id` - Get a task by ID
//! - `PUT /tasks/:id` - Replace a task's title and completion flag
//! - `DELETE /tasks/:id` - Delete a task and its direct children

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use taskgraph_core::{Task, TaskUpdate};

use crate::{AppState, HttpError};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List every task
///
/// ```bash
/// curl http://localhost:8080/tasks
/// ```
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, HttpError> {
    let tasks = state.tasks.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a task
///
/// # Request Body
///
/// Task-shaped JSON; `id` is optional and `completed` is ignored.
///
/// ```bash
/// curl -X POST http://localhost:8080/tasks \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Write docs", "parent_id": "6f1c..."}'
/// ```
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<Task>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), HttpError> {
    let Json(input) = payload?;
    let task = state.tasks.create_task(input).await?;

    tracing::info!("✅ Created task: {}", task.id);
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
///
/// ```bash
/// curl http://localhost:8080/tasks/6f1c...
/// ```
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, HttpError> {
    let task = state.tasks.get_task(&id).await?;
    Ok(Json(task))
}

/// Replace title and completed
///
/// # Request Body
///
/// Both fields are required.
///
/// ```bash
/// curl -X PUT http://localhost:8080/tasks/6f1c... \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Write docs", "completed": true}'
/// ```
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> Result<(StatusCode, &'static str), HttpError> {
    let Json(update) = payload?;
    state
        .tasks
        .update_task(&id, update.title, update.completed)
        .await?;

    tracing::debug!("📝 Updated task: {}", id);
    Ok((StatusCode::OK, "Task updated successfully"))
}

/// Delete a task and its direct children
///
/// ```bash
/// curl -X DELETE http://localhost:8080/tasks/6f1c...
/// ```
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    state.tasks.delete_task(&id).await?;

    tracing::debug!("🗑️ Deleted task: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(state)
}
