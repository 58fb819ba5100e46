//! GraphStore Trait - Graph Database Abstraction Layer
//!
//! This module defines the session/transaction seam between the task repository
//! and the graph database. The repository only ever sees query templates, named
//! parameters and positional rows; connection lifecycle, authentication and
//! pooling stay behind the trait.
//!
//! # Design Decisions
//!
//! 1. **Session per operation**: Every repository operation opens its own
//!    session and drops it on exit. Sessions release themselves in `Drop`, so
//!    success, `?` early returns and unwinding all release the session.
//! 2. **Access modes**: Reads run on [`AccessMode::Read`] sessions, writes on
//!    [`AccessMode::Write`] sessions. A write on a read session is rejected.
//! 3. **Write transactions**: [`GraphSession::execute_write`] applies all of its
//!    statements as one unit (all or nothing).
//! 4. **No retries**: A failed transaction is returned to the caller as-is.
//!
//! # Examples
//!
//! ```rust,no_run
//! use taskgraph_core::db::{AccessMode, GraphSession, GraphStore, Statement, SurrealGraphStore};
//!
//! # async fn example() -> Result<(), taskgraph_core::db::StoreError> {
//! let store = SurrealGraphStore::new_in_memory().await?;
//!
//! let mut session = store.open_session(AccessMode::Read).await?;
//! let rows = session
//!     .execute_read(
//!         Statement::new("SELECT title FROM task WHERE completed = $done;")
//!             .bind("done", false)
//!             .returning(&["title"]),
//!     )
//!     .await?;
//! println!("{} open tasks", rows.len());
//! # Ok(())
//! # }
//! ```

use crate::db::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Transaction mode a session is opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

/// A parametrized query template.
///
/// `columns` names the projection of a read statement in positional order; the
/// rows returned for the statement carry their values in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    text: String,
    params: BTreeMap<String, Value>,
    columns: Vec<String>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: BTreeMap::new(),
            columns: Vec::new(),
        }
    }

    /// Bind a named parameter (referenced as `$name` in the template).
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Declare the projected columns, in row order.
    pub fn returning(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &BTreeMap<String, Value> {
        &self.params
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// One result row with positionally addressable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// Project a returned document onto the declared columns.
    ///
    /// Fields the document does not carry (SurrealDB omits `NONE` values) become
    /// `null`. A document that is not an object cannot be projected and is kept
    /// as a single positional value.
    pub fn project(columns: &[String], document: Value) -> Self {
        let values = match document {
            Value::Object(mut fields) => columns
                .iter()
                .map(|column| fields.remove(column).unwrap_or(Value::Null))
                .collect(),
            other => vec![other],
        };

        Self {
            columns: columns.to_vec(),
            values,
        }
    }

    /// Value at `index`, `None` when the row is shorter than that.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Column name at `index`, if one was declared.
    pub fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Entry point to a graph database.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single store handle is shared by
/// every concurrent caller and hands out one session per operation.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Open a session in the given mode.
    ///
    /// The session is released when the returned box is dropped.
    async fn open_session(&self, mode: AccessMode) -> Result<Box<dyn GraphSession>, StoreError>;
}

/// A single-operation session against a [`GraphStore`].
#[async_trait]
pub trait GraphSession: Send {
    fn access_mode(&self) -> AccessMode;

    /// Run one read statement and return its rows.
    ///
    /// An empty result is `Ok(vec![])`, never an error.
    async fn execute_read(&mut self, statement: Statement) -> Result<Vec<Row>, StoreError>;

    /// Run all statements inside one write transaction.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ReadOnlySession`] on a session opened with [`AccessMode::Read`]
    /// - Any store failure; none of the statements are applied in that case
    async fn execute_write(&mut self, statements: Vec<Statement>) -> Result<(), StoreError>;
}
