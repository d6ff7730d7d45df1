use crate::error::TodoError;
use crate::model::NewTodo;

pub const MIN_NAME_LEN: usize = 10;

// Request body for creating or updating a todo
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemInput {
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItemInput {
    pub fn new(name: impl Into<String>, is_complete: bool) -> Self {
        TodoItemInput {
            name: name.into(),
            is_complete,
        }
    }

    /// Rejects blank names and names shorter than [`MIN_NAME_LEN`].
    ///
    /// Length is measured in UTF-16 code units, so a character outside the
    /// Basic Multilingual Plane (most emoji) counts twice.
    pub fn validate(&self) -> Result<(), TodoError> {
        if self.name.trim().is_empty() {
            return Err(TodoError::Validation("name is required".to_string()));
        }
        let len = self.name.encode_utf16().count();
        if len < MIN_NAME_LEN {
            return Err(TodoError::Validation(format!(
                "name must be at least {} characters long, got {}",
                MIN_NAME_LEN, len
            )));
        }
        Ok(())
    }
}

impl From<TodoItemInput> for NewTodo {
    fn from(input: TodoItemInput) -> Self {
        NewTodo {
            name: input.name,
            is_complete: input.is_complete,
            secret: None,
        }
    }
}
