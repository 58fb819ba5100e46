//! Database Layer
//!
//! This module handles all graph store interactions:
//!
//! - [`GraphStore`] / [`GraphSession`] - the session and transaction seam
//! - [`SurrealGraphStore`] - embedded SurrealDB backend
//! - [`TaskRepository`] - task operations as graph transactions
//! - `task_record` - row to [`Task`](crate::models::Task) mapping
//!
//! # Architecture
//!
//! Tasks are `task` records; the hierarchy is the `has_parent` relation from a
//! child to its parent. The repository issues SurrealQL templates (see
//! `queries`) through the seam and never touches the engine directly.

mod error;
mod graph_store;
pub mod queries;
mod surreal_store;
mod task_record;
mod task_repository;

pub use error::StoreError;
pub use graph_store::{AccessMode, GraphSession, GraphStore, Row, Statement};
pub use surreal_store::SurrealGraphStore;
pub use task_repository::TaskRepository;
