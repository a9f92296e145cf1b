use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Boundary error for the API.
///
/// The only failure class this service surfaces is an unexpected internal
/// fault; everything recoverable (price fetch, bad filter input) is
/// absorbed before reaching a handler result. Detail is logged server-side,
/// the caller gets a generic message.
#[derive(Debug)]
pub enum AppError {
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
            }
        }

        // never echo internals back to the caller
        let body = Json(json!({
            "error": "failed to load products",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
