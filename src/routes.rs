// Route path constants for the demo application. Diagnostic endpoints come from Config.

pub const MOVIES: &str = "/movies";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
