use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::TodoStore;
use crate::error::StoreError;
use crate::model::{NewTodo, TodoItem};

#[derive(Debug)]
struct Inner {
    items: BTreeMap<i32, TodoItem>,
    next_id: i32,
}

/// In-memory todo store. Map and id counter share one lock so concurrent
/// inserts can never hand out the same id.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.items.values().cloned().collect())
    }

    async fn list_complete(&self) -> Result<Vec<TodoItem>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .items
            .values()
            .filter(|item| item.is_complete)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<TodoItem>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.items.get(&id).cloned())
    }

    async fn insert(&self, todo: NewTodo) -> Result<TodoItem, StoreError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;

        let item = TodoItem {
            id,
            name: todo.name,
            is_complete: todo.is_complete,
            secret: todo.secret,
        };
        inner.items.insert(id, item.clone());
        Ok(item)
    }

    async fn update_by_id(
        &self,
        id: i32,
        name: &str,
        is_complete: bool,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        match inner.items.get_mut(&id) {
            Some(item) => {
                item.name = name.to_string();
                item.is_complete = is_complete;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        Ok(inner.items.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_todo(name: &str, is_complete: bool) -> NewTodo {
        NewTodo {
            name: name.to_string(),
            is_complete,
            secret: None,
        }
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = MemoryStore::new();
        store.insert(new_todo("Buy groceries", false)).await.unwrap();

        for id in [0, 2, -1, 100, i32::MAX] {
            assert_eq!(store.get_by_id(id).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_keeps_values() {
        let store = MemoryStore::new();
        let todo = NewTodo {
            name: "Walk the dog".to_string(),
            is_complete: true,
            secret: Some("leash in the hall".to_string()),
        };

        let stored = store.insert(todo.clone()).await.unwrap();
        let fetched = store.get_by_id(stored.id).await.unwrap().unwrap();

        assert_eq!(fetched, stored);
        assert_eq!(fetched.name, todo.name);
        assert_eq!(fetched.is_complete, todo.is_complete);
        assert_eq!(fetched.secret, todo.secret);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.insert(new_todo("Buy groceries", false)).await.unwrap();
        let second = store.insert(new_todo("Walk the dog", false)).await.unwrap();
        assert!(store.delete_by_id(second.id).await.unwrap());

        let third = store.insert(new_todo("Wash the cat", false)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn list_complete_is_exact_filter_of_list_all() {
        let store = MemoryStore::new();
        store.insert(new_todo("Buy groceries", false)).await.unwrap();
        store.insert(new_todo("Walk the dog", true)).await.unwrap();
        store.insert(new_todo("Wash the cat", true)).await.unwrap();
        store.insert(new_todo("Water the plants", false)).await.unwrap();

        let all = store.list_all().await.unwrap();
        let complete = store.list_complete().await.unwrap();
        let expected: Vec<_> = all.into_iter().filter(|t| t.is_complete).collect();

        assert_eq!(complete, expected);
        assert_eq!(
            complete.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[tokio::test]
    async fn update_overwrites_mutable_fields_only() {
        let store = MemoryStore::new();
        let stored = store
            .insert(NewTodo {
                name: "Buy groceries".to_string(),
                is_complete: false,
                secret: Some("coupon".to_string()),
            })
            .await
            .unwrap();

        assert!(store
            .update_by_id(stored.id, "Buy more groceries", true)
            .await
            .unwrap());

        let fetched = store.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Buy more groceries");
        assert!(fetched.is_complete);
        assert_eq!(fetched.secret.as_deref(), Some("coupon"));
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let store = MemoryStore::new();
        assert!(!store.update_by_id(5, "Nothing here", true).await.unwrap());
        assert!(!store.delete_by_id(5).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = MemoryStore::new();
        store.insert(new_todo("Buy groceries", false)).await.unwrap();
        let target = store.insert(new_todo("Walk the dog", true)).await.unwrap();
        store.insert(new_todo("Wash the cat", true)).await.unwrap();

        assert!(store.delete_by_id(target.id).await.unwrap());

        assert_eq!(store.get_by_id(target.id).await.unwrap(), None);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn insert_fails_cleanly_when_ids_run_out() {
        let store = MemoryStore::new();
        store.inner.lock().await.next_id = i32::MAX - 1;

        let last = store.insert(new_todo("Second to last", false)).await.unwrap();
        assert_eq!(last.id, i32::MAX - 1);

        let err = store.insert(new_todo("One too many", false)).await.unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted));

        // the lock is released and the store is untouched
        assert_eq!(store.list_all().await.unwrap(), vec![last]);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_unique_ids() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert(new_todo(&format!("Concurrent task {i}"), false))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(store.list_all().await.unwrap().len(), 32);
    }
}
