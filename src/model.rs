// Stored todo item. Not Serialize: `secret` must never leave the service.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TodoItem {
    pub id: i32,
    pub name: String,
    pub is_complete: bool,
    pub secret: Option<String>,
}

// Values for a todo that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub is_complete: bool,
    pub secret: Option<String>,
}

// Public projection of a todo item returned by every endpoint
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemView {
    pub id: i32,
    pub name: String,
    pub is_complete: bool,
}

impl From<&TodoItem> for TodoItemView {
    fn from(item: &TodoItem) -> Self {
        TodoItemView {
            id: item.id,
            name: item.name.clone(),
            is_complete: item.is_complete,
        }
    }
}

impl From<TodoItem> for TodoItemView {
    fn from(item: TodoItem) -> Self {
        TodoItemView {
            id: item.id,
            name: item.name,
            is_complete: item.is_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_drops_secret_and_uses_camel_case() {
        let item = TodoItem {
            id: 3,
            name: "Wash the cat".to_string(),
            is_complete: true,
            secret: Some("hunter2".to_string()),
        };

        let json = serde_json::to_value(TodoItemView::from(&item)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Wash the cat", "isComplete": true})
        );
        assert!(!json.to_string().contains("hunter2"));
    }
}
