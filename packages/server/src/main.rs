//! TaskGraph server binary
//!
//! Reads [`ServerConfig`] from the environment, opens the graph store and
//! serves the task endpoints. See `config.rs` for the variables.

use std::sync::Arc;

use taskgraph_core::{SurrealGraphStore, TaskService};
use taskgraph_server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("📦 Store: {:?}", config.store.location);

    let store = Arc::new(SurrealGraphStore::connect(&config.store).await?);
    let tasks = TaskService::new(store);

    start_server(&config, tasks).await
}
