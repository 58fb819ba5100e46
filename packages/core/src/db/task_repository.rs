//! Task Repository
//!
//! Translates the five task operations into graph transactions. Each operation
//! opens exactly one session and lets it drop on return, so the session is
//! released on success, on error and on early return alike.
//!
//! # Transaction Boundaries
//!
//! | Operation   | Mode  | Transactions                                        |
//! |-------------|-------|-----------------------------------------------------|
//! | `list_all`  | Read  | one                                                 |
//! | `get_by_id` | Read  | one                                                 |
//! | `create`    | Write | node, then (if a parent is given) a separate edge   |
//! | `update`    | Write | one                                                 |
//! | `delete`    | Write | one, children first then the node itself            |
//!
//! `create` is deliberately not atomic across its two steps: a failure between
//! them leaves a root task that was meant to have a parent.

use crate::db::{queries, AccessMode, GraphSession, GraphStore};
use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskUpdate};
use std::sync::Arc;
use tracing::instrument;

/// Repository over a shared graph store handle
#[derive(Clone)]
pub struct TaskRepository {
    store: Arc<dyn GraphStore>,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Every task, in no particular order. Empty store yields an empty vector.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> TaskResult<Vec<Task>> {
        let mut session = self.store.open_session(AccessMode::Read).await?;
        let rows = session.execute_read(queries::list_tasks()).await?;

        rows.iter().map(Task::try_from).collect()
    }

    /// One task by id.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] when no node matches
    /// - [`TaskError::DataCorruption`] when the row cannot be mapped
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> TaskResult<Task> {
        let mut session = self.store.open_session(AccessMode::Read).await?;
        let rows = session.execute_read(queries::get_task(id)).await?;

        match rows.first() {
            Some(row) => Task::try_from(row),
            None => Err(TaskError::not_found(id)),
        }
    }

    /// Persist a task and, if it names a parent, link it.
    ///
    /// A parent id that matches no task creates no edge and is not an error;
    /// the task then reads back as a root.
    #[instrument(skip(self, task), fields(id = %task.id, parent_id = ?task.parent_id()))]
    pub async fn create(&self, task: Task) -> TaskResult<Task> {
        let mut session = self.store.open_session(AccessMode::Write).await?;

        session
            .execute_write(vec![queries::create_task_node(&task)])
            .await?;

        if let Some(parent_id) = task.parent_id() {
            tracing::debug!(parent_id, "Attaching parent edge");
            session
                .execute_write(vec![queries::attach_parent(&task.id, parent_id)])
                .await?;
        }

        Ok(task)
    }

    /// Overwrite title and completed. An unknown id is a silent success.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: TaskUpdate) -> TaskResult<()> {
        let mut session = self.store.open_session(AccessMode::Write).await?;

        session
            .execute_write(vec![queries::update_task(id, &update)])
            .await?;
        Ok(())
    }

    /// Delete a task together with its direct children (depth one).
    ///
    /// Both deletions share one write transaction. An unknown id is a silent
    /// success.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> TaskResult<()> {
        let mut session = self.store.open_session(AccessMode::Write).await?;

        session
            .execute_write(vec![queries::delete_children(id), queries::delete_task(id)])
            .await?;
        Ok(())
    }
}
