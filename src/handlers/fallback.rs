use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for paths with no route
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri.path());
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}

/// Fallback for known paths requested with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("Method {} not allowed for {}", method, uri.path());
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}
