use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ct_routing::RouteError;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with.  The `Display` text becomes the
/// `{"error": …}` body, so variants never carry provider detail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Not found.")]
    UnknownEndpoint,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Route(RouteError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Route(RouteError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Route(RouteError::Upstream(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnknownEndpoint => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
