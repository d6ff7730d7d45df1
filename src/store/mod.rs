//! Storage for todo items.
//!
//! Controllers only see the [`TodoStore`] trait. Two backends implement it:
//!
//! - [`MemoryStore`]: a plain ordered map guarded by a single mutex. This is
//!   the default and what the tests run against.
//! - [`SqliteStore`]: the same contract over an sqlx pool, defaulting to an
//!   in-memory SQLite database.
//!
//! Both assign ids on insert, never reuse them, and return items in id order.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{NewTodo, TodoItem};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError>;

    async fn list_complete(&self) -> Result<Vec<TodoItem>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<TodoItem>, StoreError>;

    /// Stores `todo` under a fresh id and returns the stored item.
    async fn insert(&self, todo: NewTodo) -> Result<TodoItem, StoreError>;

    /// Overwrites `name` and `is_complete`. Returns `false` if `id` is unknown.
    async fn update_by_id(&self, id: i32, name: &str, is_complete: bool)
        -> Result<bool, StoreError>;

    /// Returns `false` if `id` is unknown.
    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError>;
}
