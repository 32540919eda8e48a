//! Unified API router for stringstore
//!
//! Merges the string-store routes with a root health probe, CORS, and
//! request tracing into a single axum `Router`.
//!
//! ## Endpoint Map
//!
//! | Method & Path                            | Description                       |
//! |------------------------------------------|-----------------------------------|
//! | `GET /health`                            | Liveness probe                    |
//! | `POST /strings`                          | Analyze and store a string        |
//! | `GET /strings`                           | Filtered list (query params)      |
//! | `GET /strings/filter-by-natural-language`| Filtered list (free-text query)   |
//! | `GET /strings/:string_value`             | Fetch one record                  |
//! | `DELETE /strings/:string_value`          | Delete one record                 |

use crate::strings::{strings_router, StringsState};
use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete stringstore HTTP application
///
/// Returns a single `Router` ready to be served by `axum::serve`.
pub fn build_app(state: StringsState, cors_origins: &[String]) -> Router {
    let cors = build_cors(cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(strings_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// =============================================================================
// Root handlers
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
