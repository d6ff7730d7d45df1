use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::from_fn,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    doc::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH},
    handler::*,
    middleware::mw_log_request,
    AppState,
};

pub fn create_router(app_state: Arc<AppState>, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    Router::new()
        .route("/", get(health_checker_handler))
        .route("/todoitems", get(get_all_todos).post(create_todo))
        .route("/todoitems/", get(get_all_todos).post(create_todo))
        .route("/todoitems/complete", get(get_complete_todos))
        .route(
            "/todoitems/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(app_state)
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(cors)
        .layer(from_fn(mw_log_request))
}
