use crate::models::MoviesResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /movies handler - List all movies
#[utoipa::path(
    get,
    path = routes::MOVIES,
    responses(
        (status = 200, description = "List of movies", body = MoviesResponse)
    ),
    tag = "movies"
)]
pub async fn movies_handler() -> (StatusCode, Json<MoviesResponse>) {
    tracing::debug!(count = 2, "List of movies requested");
    (
        StatusCode::OK,
        Json(MoviesResponse {
            movies: vec!["The Godfather".to_string(), "The Dark Knight".to_string()],
        }),
    )
}
