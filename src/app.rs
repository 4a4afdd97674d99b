use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application routes. Diagnostic pages are not part of this table; they are answered by the
/// dispatch guard wrapped around it.
pub fn router() -> Router {
    Router::new()
        .route(routes::MOVIES, get(handlers::movies_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
