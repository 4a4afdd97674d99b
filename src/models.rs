use serde::{Deserialize, Serialize};

/// Response type for the movie listing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MoviesResponse {
    pub movies: Vec<String>,
}
