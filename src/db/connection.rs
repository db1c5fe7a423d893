use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use crate::errors::NaviError;

/// Shared handle to the embedded store. Cloning is cheap; every clone talks to
/// the same connection.
#[derive(Clone)]
pub struct Database {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(path: &str) -> Result<Self, NaviError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| NaviError::Database(format!("Failed to open database: {}", e)))?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| NaviError::Database(format!("Failed to set pragmas: {}", e)))?;

        let db = Self { conn: Arc::new(Mutex::new(conn)) };
        db.initialize()?;
        debug!(path = %path, "Database ready");
        Ok(db)
    }

    pub fn in_memory() -> Result<Self, NaviError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| NaviError::Database(format!("Failed to open in-memory db: {}", e)))?;
        let db = Self { conn: Arc::new(Mutex::new(conn)) };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> Result<(), NaviError> {
        let conn = self.session()?;
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| NaviError::Database(format!("Failed to create tables: {}", e)))?;
        Ok(())
    }

    /// Acquire the connection for the duration of one operation. The guard
    /// releases it on drop, whether the operation succeeded or not.
    pub(crate) fn session(&self) -> Result<MutexGuard<'_, Connection>, NaviError> {
        self.conn
            .lock()
            .map_err(|_| NaviError::Database("Connection lock poisoned".into()))
    }

    pub fn conn(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}
