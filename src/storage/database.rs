//! SQLite Database
//!
//! Embedded database for persistent storage using rusqlite with r2d2 connection pooling.
//! Holds the LinkedIn OAuth users table.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};

use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::database_path;

/// Stored LinkedIn user row
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub linkedin_id: String,
    pub access_token: String,
    pub expires_at: i64,
}

/// Type alias for the connection pool
pub type DbPool = Pool<SqliteConnectionManager>;

/// Database service for managing SQLite operations
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a database from an existing connection pool
    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// Create an in-memory database for testing.
    ///
    /// Uses an in-memory SQLite database with the same schema as the
    /// production database. Useful for integration and unit tests.
    pub fn new_in_memory() -> AppResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(|e| AppError::database(format!("Failed to create connection pool: {}", e)))?;

        Self::from_pool(pool)
    }

    /// Create a new database instance with connection pooling
    pub fn new() -> AppResult<Self> {
        let db_path = database_path()?;

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(&db_path);
        let pool = Pool::builder()
            .max_size(10)
            .build(manager)
            .map_err(|e| AppError::database(format!("Failed to create connection pool: {}", e)))?;

        Self::from_pool(pool)
    }

    /// Initialize the database schema
    fn init_schema(&self) -> AppResult<()> {
        let conn = self.get_connection()?;

        // Create users table for LinkedIn OAuth tokens
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                linkedin_id TEXT NOT NULL UNIQUE,
                access_token TEXT NOT NULL,
                expires_at INTEGER NOT NULL,
                created_at TEXT DEFAULT CURRENT_TIMESTAMP,
                updated_at TEXT DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        Ok(())
    }

    /// Get a pooled connection
    pub fn get_connection(&self) -> AppResult<r2d2::PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| AppError::database(format!("Failed to get connection: {}", e)))
    }

    /// Insert or update a user's access token.
    ///
    /// A second authentication for the same LinkedIn id replaces the token
    /// and expiry instead of inserting a duplicate row.
    pub fn upsert_user(
        &self,
        linkedin_id: &str,
        access_token: &str,
        expires_at: i64,
    ) -> AppResult<()> {
        let conn = self.get_connection()?;
        conn.execute(
            "INSERT INTO users (linkedin_id, access_token, expires_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(linkedin_id) DO UPDATE SET
                access_token = excluded.access_token,
                expires_at = excluded.expires_at,
                updated_at = CURRENT_TIMESTAMP",
            params![linkedin_id, access_token, expires_at],
        )?;
        Ok(())
    }

    /// Look up a user by LinkedIn id
    pub fn get_user(&self, linkedin_id: &str) -> AppResult<Option<User>> {
        let conn = self.get_connection()?;
        let user = conn
            .query_row(
                "SELECT id, linkedin_id, access_token, expires_at FROM users
                 WHERE linkedin_id = ?1",
                params![linkedin_id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        linkedin_id: row.get(1)?,
                        access_token: row.get(2)?,
                        expires_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Count stored users
    pub fn count_users(&self) -> AppResult<i64> {
        let conn = self.get_connection()?;
        let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Check if the database is reachable
    pub fn is_healthy(&self) -> bool {
        if let Ok(conn) = self.pool.get() {
            conn.query_row("SELECT 1", [], |_| Ok(())).is_ok()
        } else {
            false
        }
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("pool_size", &self.pool.state().connections)
            .finish()
    }
}
