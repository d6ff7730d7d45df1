//! Todo operations, independent of HTTP.
//!
//! Each function takes the store explicitly and returns the public view of
//! the affected items. The HTTP handlers translate the `Err` side into
//! status codes.

use crate::{
    error::TodoError,
    model::{TodoItem, TodoItemView},
    schema::TodoItemInput,
    store::TodoStore,
};

fn to_views(items: Vec<TodoItem>) -> Vec<TodoItemView> {
    items.into_iter().map(TodoItemView::from).collect()
}

pub async fn get_all_todos(store: &dyn TodoStore) -> Result<Vec<TodoItemView>, TodoError> {
    let todos = store.list_all().await?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(to_views(todos))
}

pub async fn get_complete_todos(store: &dyn TodoStore) -> Result<Vec<TodoItemView>, TodoError> {
    let todos = store.list_complete().await?;
    tracing::debug!(count = todos.len(), "listed complete todos");
    Ok(to_views(todos))
}

pub async fn get_todo(id: i32, store: &dyn TodoStore) -> Result<TodoItemView, TodoError> {
    store
        .get_by_id(id)
        .await?
        .map(TodoItemView::from)
        .ok_or(TodoError::NotFound(id))
}

pub async fn create_todo(
    input: TodoItemInput,
    store: &dyn TodoStore,
) -> Result<TodoItemView, TodoError> {
    input.validate()?;
    let todo = store.insert(input.into()).await?;
    tracing::info!(id = todo.id, "created todo");
    Ok(todo.into())
}

/// Validation runs before the lookup, so a bad name on an unknown id is a 400.
pub async fn update_todo(
    id: i32,
    input: TodoItemInput,
    store: &dyn TodoStore,
) -> Result<(), TodoError> {
    input.validate()?;
    if !store.update_by_id(id, &input.name, input.is_complete).await? {
        return Err(TodoError::NotFound(id));
    }
    tracing::info!(id, "updated todo");
    Ok(())
}

pub async fn delete_todo(id: i32, store: &dyn TodoStore) -> Result<(), TodoError> {
    if !store.delete_by_id(id).await? {
        return Err(TodoError::NotFound(id));
    }
    tracing::info!(id, "deleted todo");
    Ok(())
}
