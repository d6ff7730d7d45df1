use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    query, query_as,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use super::TodoStore;
use crate::error::StoreError;
use crate::model::{NewTodo, TodoItem};

pub const MEMORY_URL: &str = "sqlite::memory:";

/// Todo store backed by SQLite through an sqlx pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Pool<Sqlite>,
}

impl SqliteStore {
    /// Opens `url`, creating the database file and the `todos` table if needed.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to `:memory:` gets its own database, so keep
        // exactly one connection alive for the lifetime of the pool.
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(10)
        };
        let db = pool_options.connect_with(options).await?;

        query(
            r#"CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            is_complete BOOLEAN NOT NULL DEFAULT 0,
            secret TEXT
        );"#,
        )
        .execute(&db)
        .await?;

        tracing::debug!(url, "sqlite todo store ready");
        Ok(SqliteStore { db })
    }

    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect(MEMORY_URL).await
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        let todos = query_as::<_, TodoItem>(
            "SELECT id, name, is_complete, secret FROM todos ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(todos)
    }

    async fn list_complete(&self) -> Result<Vec<TodoItem>, StoreError> {
        let todos = query_as::<_, TodoItem>(
            "SELECT id, name, is_complete, secret FROM todos WHERE is_complete = 1 ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(todos)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<TodoItem>, StoreError> {
        let todo = query_as::<_, TodoItem>(
            "SELECT id, name, is_complete, secret FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(todo)
    }

    async fn insert(&self, todo: NewTodo) -> Result<TodoItem, StoreError> {
        let todo = query_as::<_, TodoItem>(
            "INSERT INTO todos (name, is_complete, secret) VALUES (?, ?, ?) \
             RETURNING id, name, is_complete, secret",
        )
        .bind(todo.name)
        .bind(todo.is_complete)
        .bind(todo.secret)
        .fetch_one(&self.db)
        .await?;
        Ok(todo)
    }

    async fn update_by_id(
        &self,
        id: i32,
        name: &str,
        is_complete: bool,
    ) -> Result<bool, StoreError> {
        let rows_affected = query("UPDATE todos SET name = ?, is_complete = ? WHERE id = ?")
            .bind(name)
            .bind(is_complete)
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError> {
        let rows_affected = query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}
