//! Business Services
//!
//! - `TaskService` - the task operation surface used by the transport layer
//!
//! Services sequence repository calls and apply creation rules; persistence
//! and hierarchy semantics live in [`crate::db::TaskRepository`].

pub mod task_service;

pub use task_service::TaskService;
