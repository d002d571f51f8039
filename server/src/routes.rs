//! Axum router wiring the harness endpoints.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the harness router: health, RPC, indexer, and the client bundle.
pub fn app(state: AppState) -> Router {
    let index = state.static_dir.join("index.html");
    let static_files = ServeDir::new(&state.static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/rpc", post(rpc))
        .route("/graph", post(graph))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn rpc(
    State(state): State<AppState>,
    Json(request): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    Json(crate::rpc::handle(&state.fixtures, &request))
}

async fn graph(
    State(state): State<AppState>,
    Json(request): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    Json(crate::graph::handle(&state.fixtures, &request))
}
