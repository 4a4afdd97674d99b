use utoipa::OpenApi;

use crate::handlers;
use crate::models::MoviesResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "zpages demo API",
        version = "1.0.0",
        description = "A movie listing served next to /livez and /readyz diagnostic pages"
    ),
    paths(
        handlers::movies::movies_handler
    ),
    components(
        schemas(
            MoviesResponse
        )
    ),
    tags(
        (name = "movies", description = "Movie catalogue operations")
    )
)]
pub struct ApiDoc;
