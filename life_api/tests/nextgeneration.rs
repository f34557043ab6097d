// nextgeneration.rs - Integration tests for POST /gameoflife/nextgeneration

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn post_grid(body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/gameoflife/nextgeneration")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = life_api::app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn next_generation_returns_expected_result() {
    let (status, body) = post_grid("[[true,true],[true,false]]").await;

    assert_eq!(status, StatusCode::OK);
    let grid: Vec<Vec<bool>> = serde_json::from_str(&body).unwrap();
    assert_eq!(grid, vec![vec![true, true], vec![true, true]]);
}

#[tokio::test]
async fn next_generation_on_grid_edge_returns_expected_result() {
    let (status, body) = post_grid("[[true,true],[true,false]]").await;

    assert_eq!(status, StatusCode::OK);
    let grid: Vec<Vec<bool>> = serde_json::from_str(&body).unwrap();
    // Dead corner cell with three live neighbours comes alive
    assert!(grid[1][1]);
}

#[tokio::test]
async fn ragged_grid_returns_bad_request() {
    let (status, body) = post_grid("[[true, true], [true]]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("expected 2"));
}

#[tokio::test]
async fn invalid_json_returns_bad_request() {
    let (status, body) = post_grid("not a grid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn wrong_element_types_return_bad_request() {
    let (status, _body) = post_grid("[[1,0],[0,1]]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_grid_round_trips() {
    let (status, body) = post_grid("[]").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}
