// lib.rs - HTTP surface for the Game of Life engine

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use life::{Grid, next_generation};

/// Build the application router. Separate from `main` so tests can drive
/// the service without binding a socket.
pub fn app() -> Router {
    Router::new().route("/gameoflife/nextgeneration", post(handle_next_generation))
}

/// Boundary failure: the request body could not be turned into a grid.
/// Renders as 400 with the human-readable message as the body.
struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::debug!("rejected request: {}", self.0);
        (StatusCode::BAD_REQUEST, self.0).into_response()
    }
}

// The body is deserialized by hand rather than through the Json extractor
// so that every malformed input (bad JSON, wrong element types, ragged
// rows) takes the same 400 path.
async fn handle_next_generation(body: Bytes) -> Result<Json<Grid>, ApiError> {
    let grid: Grid = serde_json::from_slice(&body).map_err(|err| ApiError(err.to_string()))?;
    log::debug!(
        "computing next generation for {}x{} grid",
        grid.row_count(),
        grid.col_count()
    );
    Ok(Json(next_generation(&grid)))
}
