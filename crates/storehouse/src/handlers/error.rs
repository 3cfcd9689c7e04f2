//! Error responses for the HTTP layer.
//!
//! Handlers raise [`ApiError`] for the failures they check for themselves
//! (validation, duplicates, missing records). Anything else becomes a
//! [`ApiError::Fault`], which the [`fault_barrier`] middleware renders with the
//! request method and URL.

use std::any::Any;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Request,
    },
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use storehouse_core::catalog::{ItemError, StoreError};
use storehouse_core::storage::{is_client_error, RepositoryError};

pub const ITEM_EXISTS: &str = "Item already exists!";
pub const ITEM_NOT_FOUND: &str = "Item not found with the given ID";
pub const STORE_EXISTS: &str = "Store already exists!";
pub const STORE_NOT_FOUND: &str = "Store not found with the given ID";

/// Errors returned by request handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed input: bad JSON, wrong types, out-of-range fields (422).
    Validation(String),
    /// A record with the same unique name already exists (400).
    Conflict(&'static str),
    /// The record addressed by the path does not exist (404).
    NotFound(&'static str),
    /// The body references a record that does not exist (400).
    BadReference(&'static str),
    /// Anything unexpected. Rendered by [`fault_barrier`] as a 400.
    Fault(anyhow::Error),
}

/// Marker left on a response by [`ApiError::Fault`] for the fault barrier.
#[derive(Debug, Clone)]
pub struct Fault(pub String);

fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::warn!(status = %status, message = %message, "API error");
    (status, Json(json!({ "detail": message }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => detail(StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Conflict(message) => detail(StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => detail(StatusCode::NOT_FOUND, message),
            ApiError::BadReference(message) => detail(StatusCode::BAD_REQUEST, message),
            ApiError::Fault(err) => {
                let mut response = StatusCode::BAD_REQUEST.into_response();
                response
                    .extensions_mut()
                    .insert(Fault(format!("{err:#}")));
                response
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        if is_client_error(&err) {
            tracing::warn!(error = %err, "Repository rejected request");
        } else {
            tracing::error!(error = %err, "Repository failure");
        }
        Self::Fault(err.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Fault(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// Turns a handler panic into a [`ApiError::Fault`] response.
///
/// Used with `CatchPanicLayer` inside [`fault_barrier`], so panics are
/// reported like any other fault.
pub fn panic_to_fault(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Fault(anyhow::anyhow!(detail)).into_response()
}

/// Top-level fault barrier.
///
/// Rewrites responses marked with [`Fault`] into
/// `400 {"message": "Failed to execute: <METHOD>: <URL>. Detail: <error>"}`.
pub async fn fault_barrier(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let url = match request.headers().get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{host}{}", request.uri()),
        None => request.uri().to_string(),
    };

    let response = next.run(request).await;

    let Some(Fault(error)) = response.extensions().get::<Fault>().cloned() else {
        return response;
    };

    tracing::error!(%method, %url, %error, "Request failed");

    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "message": format!("Failed to execute: {method}: {url}. Detail: {error}")
        })),
    )
        .into_response()
}
