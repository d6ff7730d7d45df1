//! OpenAPI document for the todo endpoints.
//!
//! Swagger UI is mounted at [`SWAGGER_UI_PATH`]. The JSON document lives
//! outside that prefix because the UI claims `/swagger/*rest`.

use utoipa::OpenApi;

use crate::{model::TodoItemView, schema::TodoItemInput};

pub const SWAGGER_UI_PATH: &str = "/swagger";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/TodoAPI/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "TodoAPI v1", version = "v1"),
    paths(
        crate::handler::get_all_todos,
        crate::handler::get_complete_todos,
        crate::handler::get_todo,
        crate::handler::create_todo,
        crate::handler::update_todo,
        crate::handler::delete_todo,
    ),
    components(schemas(TodoItemView, TodoItemInput)),
    tags((name = "todoitems", description = "Todo item CRUD"))
)]
pub struct ApiDoc;
