//! TaskGraph HTTP Server
//!
//! JSON transport over [`TaskService`]. Handlers decode requests, call the
//! service and map [`TaskError`](taskgraph_core::TaskError) kinds to status
//! codes; no task semantics live here.
//!
//! # Usage
//!
//! ```bash
//! # In-memory store on 127.0.0.1:8080
//! cargo run --bin taskgraph-server
//!
//! # On-disk store, custom port
//! TASKGRAPH_DB_PATH=./data/tasks.db TASKGRAPH_PORT=3001 cargo run --bin taskgraph-server
//! ```

use axum::Router;
use taskgraph_core::TaskService;
use tower_http::trace::TraceLayer;

pub mod config;
mod http_error;
mod task_endpoints;

pub use config::{ConfigError, ServerConfig};
pub use http_error::HttpError;

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub tasks: TaskService,
}

/// Create the application router with request tracing
pub fn create_router(tasks: TaskService) -> Router {
    Router::new()
        .merge(task_endpoints::routes(AppState { tasks }))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process is stopped
///
/// # Errors
///
/// Returns error if the server fails to bind or the listener fails.
pub async fn start_server(config: &ServerConfig, tasks: TaskService) -> anyhow::Result<()> {
    let app = create_router(tasks);

    let addr = config.bind_address();
    tracing::info!("🚀 Task server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
