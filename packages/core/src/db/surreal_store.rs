//! SurrealGraphStore - GraphStore Implementation for SurrealDB Backend
//!
//! This module implements the [`GraphStore`] trait on SurrealDB's embedded
//! engines: `kv-mem` for volatile stores and `kv-rocksdb` for on-disk stores.
//!
//! # Design Principles
//!
//! 1. **Record IDs**: Task nodes are `task:<id>` records; the id is never
//!    duplicated into a field
//! 2. **Relation Table**: The has-parent edge is the `has_parent` relation table
//!    (`child ->has_parent-> parent`) with no edge attributes
//! 3. **SCHEMALESS Mode**: Tables are defined idempotently at connect time
//! 4. **Write Transactions**: All statements of one
//!    [`execute_write`](GraphSession::execute_write) call are wrapped in
//!    `BEGIN TRANSACTION` / `COMMIT TRANSACTION`
//!
//! # Examples
//!
//! ```rust,no_run
//! use taskgraph_core::{StoreConfig, SurrealGraphStore};
//!
//! # async fn example() -> Result<(), taskgraph_core::StoreError> {
//! // On-disk store
//! let store = SurrealGraphStore::connect(&StoreConfig::rocksdb("./data/tasks.db")).await?;
//!
//! // Volatile store for tests
//! let scratch = SurrealGraphStore::new_in_memory().await?;
//! # Ok(())
//! # }
//! ```

use crate::config::{StoreConfig, StoreLocation};
use crate::db::{AccessMode, GraphSession, GraphStore, Row, Statement, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use surrealdb::engine::local::{Db, Mem, RocksDb};
use surrealdb::Surreal;

const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS task SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS has_parent SCHEMALESS TYPE RELATION;
";

/// SurrealGraphStore implements GraphStore for embedded SurrealDB
pub struct SurrealGraphStore {
    /// SurrealDB connection (embedded engine)
    db: Arc<Surreal<Db>>,

    /// Sessions handed out and not yet dropped
    live_sessions: Arc<AtomicUsize>,
}

impl SurrealGraphStore {
    /// Open the configured engine, select namespace/database and define the schema.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The RocksDB directory cannot be created or opened
    /// - Namespace/database selection fails
    /// - Schema definition fails
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let db = match &config.location {
            StoreLocation::Memory => Surreal::new::<Mem>(())
                .await
                .map_err(|e| StoreError::connection_failed("memory", e))?,
            StoreLocation::RocksDb(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                Surreal::new::<RocksDb>(path.clone())
                    .await
                    .map_err(|e| StoreError::connection_failed(path.display().to_string(), e))?
            }
        };

        db.use_ns(config.namespace.clone())
            .use_db(config.database.clone())
            .await?;

        Self::initialize_schema(&db).await?;

        tracing::info!(
            location = ?config.location,
            namespace = %config.namespace,
            database = %config.database,
            "Graph store ready"
        );

        Ok(Self {
            db: Arc::new(db),
            live_sessions: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Volatile store with the default namespace and database.
    pub async fn new_in_memory() -> Result<Self, StoreError> {
        Self::connect(&StoreConfig::in_memory()).await
    }

    async fn initialize_schema(db: &Surreal<Db>) -> Result<(), StoreError> {
        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| StoreError::initialization_failed(e.to_string()))?;
        Ok(())
    }

    /// Number of sessions currently open against this store.
    pub fn active_sessions(&self) -> usize {
        self.live_sessions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GraphStore for SurrealGraphStore {
    async fn open_session(&self, mode: AccessMode) -> Result<Box<dyn GraphSession>, StoreError> {
        let open = self.live_sessions.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(?mode, open, "Opened graph session");

        Ok(Box::new(SurrealSession {
            db: Arc::clone(&self.db),
            mode,
            live_sessions: Arc::clone(&self.live_sessions),
        }))
    }
}

struct SurrealSession {
    db: Arc<Surreal<Db>>,
    mode: AccessMode,
    live_sessions: Arc<AtomicUsize>,
}

impl Drop for SurrealSession {
    fn drop(&mut self) {
        let open = self.live_sessions.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::debug!(mode = ?self.mode, open, "Released graph session");
    }
}

#[async_trait]
impl GraphSession for SurrealSession {
    fn access_mode(&self) -> AccessMode {
        self.mode
    }

    async fn execute_read(&mut self, statement: Statement) -> Result<Vec<Row>, StoreError> {
        tracing::debug!(query = statement.text(), "Executing read statement");

        let mut query = self.db.query(statement.text().to_owned());
        for (name, value) in statement.params() {
            query = query.bind((name.clone(), value.clone()));
        }

        let mut response = query.await?.check()?;
        let documents: Vec<Value> = response.take(0)?;

        Ok(documents
            .into_iter()
            .map(|document| Row::project(statement.columns(), document))
            .collect())
    }

    async fn execute_write(&mut self, statements: Vec<Statement>) -> Result<(), StoreError> {
        if self.mode != AccessMode::Write {
            return Err(StoreError::ReadOnlySession);
        }
        if statements.is_empty() {
            return Ok(());
        }

        let (text, params) = transaction_script(&statements)?;
        tracing::debug!(statements = statements.len(), "Executing write transaction");

        let mut query = self.db.query(text);
        for (name, value) in params {
            query = query.bind((name, value));
        }

        query.await?.check()?;
        Ok(())
    }
}

/// Join statements into one transaction script with a merged parameter map.
fn transaction_script(
    statements: &[Statement],
) -> Result<(String, BTreeMap<String, Value>), StoreError> {
    let mut text = String::from("BEGIN TRANSACTION;\n");
    let mut params: BTreeMap<String, Value> = BTreeMap::new();

    for statement in statements {
        text.push_str(statement.text().trim());
        text.push('\n');

        for (name, value) in statement.params() {
            match params.get(name) {
                Some(existing) if existing != value => {
                    return Err(StoreError::conflicting_parameter(name.as_str()));
                }
                Some(_) => {}
                None => {
                    params.insert(name.clone(), value.clone());
                }
            }
        }
    }

    text.push_str("COMMIT TRANSACTION;");
    Ok((text, params))
}
