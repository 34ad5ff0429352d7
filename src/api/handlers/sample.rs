//! Demo endpoints showing how handlers bind models into responses.
//!
//! Kept deliberately tiny: one endpoint returns a single message, the
//! other a composite model (list, map, nested DTO) so clients can see
//! how each shape serializes.

use std::collections::HashMap;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Model for `GET /hello`.
#[derive(Debug, Serialize, ToSchema)]
struct HelloModel {
    msg: String,
}

/// `GET /hello` — Single-attribute model binding.
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Samples",
    summary = "Hello message",
    description = "Returns a single greeting attribute.",
    responses(
        (status = 200, description = "Greeting model", body = HelloModel),
    )
)]
pub async fn hello_handler() -> impl IntoResponse {
    tracing::info!("hello handler invoked");
    Json(HelloModel {
        msg: "hello from board-gateway".to_string(),
    })
}

/// Nested DTO for the composite sample model.
#[derive(Debug, Serialize, ToSchema)]
struct SampleDto {
    p1: String,
    p2: String,
    p3: String,
}

/// Composite model for `GET /ex/ex2`.
#[derive(Debug, Serialize, ToSchema)]
struct CompositeModel {
    list: Vec<String>,
    map: HashMap<String, String>,
    dto: SampleDto,
}

/// `GET /ex/ex2` — Composite model binding: list, map, and nested DTO.
#[utoipa::path(
    get,
    path = "/ex/ex2",
    tag = "Samples",
    summary = "Composite sample model",
    description = "Returns a list, a map, and a nested DTO in one response to demonstrate each binding shape.",
    responses(
        (status = 200, description = "Composite model", body = CompositeModel),
    )
)]
pub async fn ex2_handler() -> impl IntoResponse {
    tracing::info!("ex2 handler invoked");

    let list: Vec<String> = (1..10).map(|i| format!("data{i}")).collect();

    let mut map = HashMap::new();
    map.insert("id".to_string(), "kkw".to_string());
    map.insert("role".to_string(), "demo".to_string());

    let dto = SampleDto {
        p1: "value... p1".to_string(),
        p2: "value... p2".to_string(),
        p3: "value... p3".to_string(),
    };

    Json(CompositeModel { list, map, dto })
}

/// Sample routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/ex/ex2", get(ex2_handler))
}
