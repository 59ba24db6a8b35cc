use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use tracing::info;

use crate::errors::ServerError;

// Thread-local connection slots, one per database path.
thread_local! {
    static DB_CONNS: RefCell<HashMap<String, Connection>> = RefCell::new(HashMap::new());
}

#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONNS
            .try_with(|cell| {
                let mut slots = cell.borrow_mut();
                if !slots.contains_key(&self.path) {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
                    conn.execute_batch("PRAGMA foreign_keys = ON;")
                        .map_err(|e| ServerError::DbError(format!("Enable foreign keys failed: {e}")))?;
                    slots.insert(self.path.clone(), conn);
                }
                let conn = slots.get_mut(&self.path).ok_or(ServerError::InternalError)?;
                f(conn)
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

fn apply_sql_file(db: &Database, sql_path: &str) -> Result<(), ServerError> {
    let sql = fs::read_to_string(sql_path)
        .map_err(|e| ServerError::DbError(format!("Failed to read {sql_path}: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&sql)
            .map_err(|e| ServerError::DbError(format!("Failed to apply {sql_path}: {e}")))
    })
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    apply_sql_file(db, schema_path)?;
    info!(db = db.path(), schema = schema_path, "database initialized");
    Ok(())
}

/// Load demo data. Every statement is `insert or ignore`, so reruns are harmless.
pub fn seed_db(db: &Database, seed_path: &str) -> Result<(), ServerError> {
    apply_sql_file(db, seed_path)?;
    info!(db = db.path(), seed = seed_path, "demo data loaded");
    Ok(())
}
