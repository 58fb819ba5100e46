//! TaskGraph Core Persistence Layer
//!
//! This crate owns the task hierarchy: tasks with at most one parent, persisted
//! as nodes in a graph store and linked child-to-parent by `has_parent` edges.
//!
//! # Architecture
//!
//! - **Graph Store Seam**: [`db::GraphStore`] sessions run parametrized read and
//!   write transactions; [`db::SurrealGraphStore`] is the embedded SurrealDB backend
//! - **Task Repository**: [`db::TaskRepository`] turns task operations into graph
//!   transactions and owns the depth-one cascade delete
//! - **Record Mapper**: [`db::task_record`] converts projected rows into [`Task`] values
//! - **Façade**: [`services::TaskService`] is the surface the transport layer calls
//!
//! # Modules
//!
//! - [`models`] - Task data structures
//! - [`db`] - Graph store seam, SurrealDB backend, repository and row mapping
//! - [`services`] - Orchestration façade
//! - [`config`] - Store configuration
//! - [`error`] - Error kinds surfaced to callers

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::{StoreConfig, StoreLocation};
pub use db::{GraphStore, StoreError, SurrealGraphStore, TaskRepository};
pub use error::{ErrorKind, TaskError, TaskResult};
pub use models::{Task, TaskUpdate};
pub use services::TaskService;
