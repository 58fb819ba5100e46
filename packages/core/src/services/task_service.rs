//! Task Service
//!
//! The operation surface the transport layer calls. It assigns identifiers,
//! applies the creation rules and delegates everything else to
//! [`TaskRepository`]. It holds no state of its own beyond the repository, so
//! one instance is cloned freely across concurrent callers.
//!
//! # Creation Rules
//!
//! - An empty `id` is replaced with a fresh UUID v4
//! - `completed` is always `false` on creation, whatever the caller sent
//! - A task naming itself as parent is rejected as invalid input; since parent
//!   edges are fixed at creation and only point at existing nodes, that
//!   self-loop is the only cycle the hierarchy could otherwise form
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskgraph_core::{SurrealGraphStore, Task, TaskService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(SurrealGraphStore::new_in_memory().await?);
//! let service = TaskService::new(store);
//!
//! let parent = service.create_task(Task::new("Ship 1.0")).await?;
//! let child = service
//!     .create_task(Task::new("Tag release").with_parent(&parent.id))
//!     .await?;
//!
//! service.update_task(&child.id, "Tag and push release", true).await?;
//! service.delete_task(&parent.id).await?; // also removes `child`
//! # Ok(())
//! # }
//! ```

use crate::db::{GraphStore, TaskRepository};
use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskUpdate};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct TaskService {
    repository: TaskRepository,
}

impl TaskService {
    /// Build the service over an explicitly owned store handle.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            repository: TaskRepository::new(store),
        }
    }

    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list_all().await
    }

    /// Create a task following the creation rules above.
    ///
    /// Returns the task as persisted: with its assigned id, `completed = false`
    /// and the `parent_id` as submitted.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_task(&self, mut input: Task) -> TaskResult<Task> {
        if input.id.is_empty() {
            input.id = Uuid::new_v4().to_string();
        }
        input.completed = false;

        if input.parent_id() == Some(input.id.as_str()) {
            return Err(TaskError::invalid_input(format!(
                "task {} cannot be its own parent",
                input.id
            )));
        }

        let task = self.repository.create(input).await?;
        tracing::debug!(id = %task.id, "Created task");
        Ok(task)
    }

    pub async fn get_task(&self, id: &str) -> TaskResult<Task> {
        self.repository.get_by_id(id).await
    }

    /// Replace title and completed. Succeeds silently for an unknown id.
    pub async fn update_task(
        &self,
        id: &str,
        title: impl Into<String>,
        completed: bool,
    ) -> TaskResult<()> {
        self.repository
            .update(id, TaskUpdate::new(title, completed))
            .await
    }

    /// Delete a task and its direct children. Succeeds silently for an unknown id.
    pub async fn delete_task(&self, id: &str) -> TaskResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SurrealGraphStore;
    use crate::error::ErrorKind;

    async fn create_test_service() -> TaskService {
        let store = SurrealGraphStore::new_in_memory().await.unwrap();
        TaskService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_assigns_id_when_empty() {
        let service = create_test_service().await;
        let input = Task {
            id: String::new(),
            title: "No id yet".to_string(),
            completed: false,
            parent_id: None,
        };

        let created = service.create_task(input).await.unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_id() {
        let service = create_test_service().await;

        let created = service
            .create_task(Task::new_with_id("chosen", "Keeps id"))
            .await
            .unwrap();

        assert_eq!(created.id, "chosen");
        assert_eq!(service.get_task("chosen").await.unwrap().title, "Keeps id");
    }

    #[tokio::test]
    async fn test_create_forces_completed_false() {
        let service = create_test_service().await;
        let mut input = Task::new("Already done?");
        input.completed = true;

        let created = service.create_task(input).await.unwrap();
        let fetched = service.get_task(&created.id).await.unwrap();

        assert!(!created.completed);
        assert!(!fetched.completed);
    }

    #[tokio::test]
    async fn test_create_rejects_self_parent() {
        let service = create_test_service().await;

        let err = service
            .create_task(Task::new_with_id("loop", "Loop").with_parent("loop"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(service.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let service = create_test_service().await;
        let created = service.create_task(Task::new("Draft")).await.unwrap();

        service
            .update_task(&created.id, "Final", true)
            .await
            .unwrap();

        let fetched = service.get_task(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Final");
        assert!(fetched.completed);
    }
}
