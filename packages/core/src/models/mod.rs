//! Data Models
//!
//! - `Task` - one node of the task hierarchy
//! - `TaskUpdate` - full replacement of a task's mutable fields

mod task;

pub use task::{Task, TaskUpdate};
