//! SQLite-backed user store.
//!
//! Owns the `users` table: the schema is created at connect time if absent,
//! and `username`/`email` uniqueness is enforced by the table's UNIQUE
//! constraints rather than in application memory, so concurrent inserts
//! are resolved by the storage layer.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::info;

use crate::users::model::{User, UserSummary};

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The insert collided with an existing username or email. This is the
    /// authoritative uniqueness signal; handler pre-checks are only a fast
    /// path.
    #[error("username or email already exists")]
    ConstraintViolation,

    /// Any other database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Cloneable handle over the connection pool, passed to handlers through
/// application state instead of a process-wide connection.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Open the database (creating the file when missing) and make sure the
    /// `users` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_USERS_TABLE).execute(&pool).await?;
        info!(%database_url, "user store ready");
        Ok(Self { pool })
    }

    /// Find a user by username. Lookups are case-sensitive, matching what
    /// was stored.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a new user with an already-hashed password and return the
    /// stored row. The insert runs in an explicit transaction that is
    /// committed before this returns, so the row is visible to every other
    /// pool connection as soon as the caller has it.
    pub async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let mut tx = self.pool.begin().await?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password)
            VALUES (?, ?, ?)
            RETURNING id, username, email, password, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::ConstraintViolation
            }
            _ => StoreError::Database(e),
        })?;
        tx.commit().await?;
        Ok(user)
    }

    /// List every user without the password column (diagnostic listing).
    pub async fn list_all(&self) -> Result<Vec<UserSummary>, StoreError> {
        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT id, username, email, created_at FROM users",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Replace a user's stored password hash. Returns false when no such
    /// username exists.
    pub async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE users SET password = ? WHERE username = ?")
            .bind(password_hash)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a user. Returns false when no such username exists.
    pub async fn delete(&self, username: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Drain the pool; called once the server has finished shutting down.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
