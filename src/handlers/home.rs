use crate::routes;
use axum::http::{header, StatusCode};

/// GET / handler - Send visitors to the chat page
///
/// Responds with 302 Found and `Location: /chat`. The request body and query
/// string are ignored.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 302, description = "Redirect to the chat page",
            headers(("location" = String, description = "Always /chat")))
    ),
    tag = "home"
)]
pub async fn home_handler() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (StatusCode::FOUND, [(header::LOCATION, routes::CHAT)])
}
