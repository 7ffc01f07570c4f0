use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ErrorResponse, HealthResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "chat-app API",
        version = "1.0.0",
        description = "Front door of the chat application"
    ),
    paths(
        handlers::home::home_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "home", description = "Entry point redirects"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
