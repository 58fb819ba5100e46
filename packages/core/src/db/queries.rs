//! SurrealQL statements for the task graph.
//!
//! Persisted shape:
//!
//! ```sql
//! task:`<id>` { title: string, completed: bool }
//! task:`<child>` ->has_parent-> task:`<parent>`   -- no edge attributes
//! ```
//!
//! Task ids live in the record id, so every statement addresses a node through
//! `type::thing('task', $id)` and projects it back with `record::id(id)`.

use crate::db::Statement;
use crate::models::{Task, TaskUpdate};

/// Projection shared by every task read, in row order.
pub const TASK_COLUMNS: [&str; 4] = ["id", "title", "completed", "parent_id"];

const TASK_FIELDS: &str = "
    SELECT
        record::id(id) AS id,
        title,
        completed,
        array::first(array::map(->has_parent->task, |$owner| record::id($owner))) AS parent_id";

/// All tasks with their (optional) parent id.
pub fn list_tasks() -> Statement {
    Statement::new(format!("{TASK_FIELDS} FROM task;")).returning(&TASK_COLUMNS)
}

/// One task by id; zero rows when it does not exist.
pub fn get_task(id: &str) -> Statement {
    Statement::new(format!("{TASK_FIELDS} FROM type::thing('task', $id);"))
        .bind("id", id)
        .returning(&TASK_COLUMNS)
}

/// Create the task node without its parent edge.
pub fn create_task_node(task: &Task) -> Statement {
    Statement::new(
        "CREATE type::thing('task', $id) CONTENT { title: $title, completed: $completed } RETURN NONE;",
    )
    .bind("id", task.id.as_str())
    .bind("title", task.title.as_str())
    .bind("completed", task.completed)
}

/// Link child to parent when both nodes exist; otherwise nothing is written.
pub fn attach_parent(child_id: &str, parent_id: &str) -> Statement {
    Statement::new(
        "
        LET $child = type::thing('task', $child_id);
        LET $owner = type::thing('task', $parent_id);
        IF record::exists($child) AND record::exists($owner) {
            RELATE $child->has_parent->$owner RETURN NONE;
        };",
    )
    .bind("child_id", child_id)
    .bind("parent_id", parent_id)
}

/// Overwrite title and completed; matches nothing for an unknown id.
///
/// Filtered with `WHERE` rather than targeting the record, since
/// `UPDATE task:<id>` would create the record when it is missing.
pub fn update_task(id: &str, update: &TaskUpdate) -> Statement {
    Statement::new(
        "UPDATE task SET title = $title, completed = $completed WHERE id = type::thing('task', $id) RETURN NONE;",
    )
    .bind("id", id)
    .bind("title", update.title.as_str())
    .bind("completed", update.completed)
}

/// Delete every direct child of the task.
///
/// Records are deleted by id, and SurrealDB drops their `has_parent` edges with
/// them. Grandchildren survive and lose only their edge to the deleted child.
pub fn delete_children(id: &str) -> Statement {
    Statement::new(
        "
        LET $children = (SELECT VALUE in FROM has_parent WHERE out = type::thing('task', $id));
        DELETE $children;",
    )
    .bind("id", id)
}

/// Delete the task itself along with its own edges.
pub fn delete_task(id: &str) -> Statement {
    Statement::new("DELETE type::thing('task', $id);").bind("id", id)
}
