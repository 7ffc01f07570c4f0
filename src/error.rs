use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;

/// Custom error type for HTTP requests the router cannot serve
///
/// Every variant renders as a JSON `ErrorResponse` so clients see one error
/// shape regardless of which fallback produced it.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request path
    RouteNotFound { method: Method, path: String },
    /// The path exists but not for this method
    MethodNotAllowed { method: Method, path: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                format!("No route for {} {}", method, path),
            ),
            ApiError::MethodNotAllowed { method, path } => (
                StatusCode::METHOD_NOT_ALLOWED,
                format!("Method {} not allowed for {}", method, path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
