// Route path constants - single source of truth for all paths

pub const ROOT: &str = "/";
pub const CHAT: &str = "/chat";
pub const HEALTH: &str = "/health";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
