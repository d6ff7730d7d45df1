use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    controller,
    error::TodoError,
    extract::{JsonBody, PathParam},
    model::TodoItemView,
    schema::TodoItemInput,
    AppState,
};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Simple CRUD API with Rust and Axum";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

#[utoipa::path(
    get,
    path = "/todoitems",
    tag = "todoitems",
    responses(
        (status = 200, description = "All todo items", body = [TodoItemView]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_all_todos(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = controller::get_all_todos(data.store.as_ref()).await?;
    Ok((StatusCode::OK, Json(todos)))
}

#[utoipa::path(
    get,
    path = "/todoitems/complete",
    tag = "todoitems",
    responses(
        (status = 200, description = "Completed todo items", body = [TodoItemView]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_complete_todos(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = controller::get_complete_todos(data.store.as_ref()).await?;
    Ok((StatusCode::OK, Json(todos)))
}

#[utoipa::path(
    get,
    path = "/todoitems/{id}",
    tag = "todoitems",
    params(("id" = i32, Path, description = "Todo item id")),
    responses(
        (status = 200, description = "The todo item", body = TodoItemView),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No todo item with this id")
    )
)]
pub async fn get_todo(
    PathParam(id): PathParam<i32>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todo = controller::get_todo(id, data.store.as_ref()).await?;
    Ok((StatusCode::OK, Json(todo)))
}

#[utoipa::path(
    post,
    path = "/todoitems",
    tag = "todoitems",
    request_body = TodoItemInput,
    responses(
        (status = 201, description = "Created todo item", body = TodoItemView),
        (status = 400, description = "Invalid body or name too short")
    )
)]
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<TodoItemInput>,
) -> Result<impl IntoResponse, TodoError> {
    let todo = controller::create_todo(body, data.store.as_ref()).await?;
    let location = format!("/todoitems/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

#[utoipa::path(
    put,
    path = "/todoitems/{id}",
    tag = "todoitems",
    params(("id" = i32, Path, description = "Todo item id")),
    request_body = TodoItemInput,
    responses(
        (status = 204, description = "Todo item updated"),
        (status = 400, description = "Invalid body or name too short"),
        (status = 404, description = "No todo item with this id")
    )
)]
pub async fn update_todo(
    PathParam(id): PathParam<i32>,
    State(data): State<Arc<AppState>>,
    JsonBody(body): JsonBody<TodoItemInput>,
) -> Result<impl IntoResponse, TodoError> {
    controller::update_todo(id, body, data.store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/todoitems/{id}",
    tag = "todoitems",
    params(("id" = i32, Path, description = "Todo item id")),
    responses(
        (status = 204, description = "Todo item deleted"),
        (status = 404, description = "No todo item with this id")
    )
)]
pub async fn delete_todo(
    PathParam(id): PathParam<i32>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, TodoError> {
    controller::delete_todo(id, data.store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}
