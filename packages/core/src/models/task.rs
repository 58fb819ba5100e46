//! Task Data Structures
//!
//! A [`Task`] is a transient value copy of one persisted task node. The graph
//! store owns the persisted state; values crossing the API boundary are never
//! live references into it.
//!
//! # Examples
//!
//! ```rust
//! use taskgraph_core::models::Task;
//!
//! let root = Task::new("Plan release");
//! let child = Task::new("Write changelog").with_parent(&root.id);
//!
//! assert!(root.is_root());
//! assert_eq!(child.parent_id(), Some(root.id.as_str()));
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One task in the hierarchy.
///
/// # Fields
///
/// - `id`: Globally unique, immutable once assigned (UUID v4 when generated)
/// - `title`: Mutable display text
/// - `completed`: Mutable completion flag, `false` at creation
/// - `parent_id`: Reference (not ownership) to another task; `None` means root
///
/// Fields default when absent from a JSON payload so a bare `{"title": ".."}`
/// body is a well-typed creation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier; empty means "assign one on creation"
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub completed: bool,

    /// Parent task ID, set only at creation
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Task {
    /// Create a root task with a freshly generated ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::new_with_id(Uuid::new_v4().to_string(), title)
    }

    /// Create a root task with a caller-chosen ID.
    pub fn new_with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            parent_id: None,
        }
    }

    /// Set the parent reference (builder style).
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Effective parent ID: present and non-empty.
    ///
    /// An empty string is treated the same as no parent at all.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|id| !id.is_empty())
    }

    /// True when the task has no effective parent.
    pub fn is_root(&self) -> bool {
        self.parent_id().is_none()
    }
}

/// Full replacement of a task's mutable fields.
///
/// Both fields are required: updates are not partial, so a caller changing only
/// the title still supplies the current completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    pub completed: bool,
}

impl TaskUpdate {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}
