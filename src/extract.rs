//! Request extractors whose rejections use the service's JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::TodoError;

// JSON body; malformed or mistyped bodies become `TodoError::Validation`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(TodoError))]
pub struct JsonBody<T>(pub T);

// Path parameters; unparsable ids become `TodoError::Validation`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(TodoError))]
pub struct PathParam<T>(pub T);
