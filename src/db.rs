//! Database access for the wall.
//!
//! One table, three statements. The pool is created once at startup and
//! shared across handlers through [`crate::context::AppContext`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DbConfig;

/// Database connection pool type
pub type DbPool = Pool<Sqlite>;

/// Message record, as stored and as served over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Create a SQLite connection pool
pub async fn create_pool(database_url: &str, db_config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.acquire_timeout_secs))
        .idle_timeout(Some(Duration::from_secs(db_config.idle_timeout_secs)))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Fetch every message, oldest first. `id` breaks creation-time ties so the
/// order is total and stable across polls.
pub async fn list_messages(pool: &DbPool) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, content, created_at
        FROM messages
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Insert a message; the store assigns `id` and `created_at`.
///
/// `created_at` is bound here rather than left to the column default so every
/// stored value carries the same textual encoding.
pub async fn insert_message(pool: &DbPool, content: &str) -> Result<Message, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (content, created_at)
        VALUES (?1, ?2)
        RETURNING id, content, created_at
        "#,
    )
    .bind(content)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Delete a message by id. Deleting an id that does not exist is not an
/// error; the statement simply matches no rows.
pub async fn delete_message(pool: &DbPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM messages WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
