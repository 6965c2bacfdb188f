//! screener-server
//!
//! HTTP surface for the screening engine: intake analysis, photo emotion
//! estimates, stored records and report export.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Largest photo accepted by `POST /emotion`.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Build the router with every route and layer attached.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::status))
        .route("/health", get(routes::health::health_check))
        .route("/analyze", post(routes::analyze::analyze))
        .route(
            "/emotion",
            post(routes::emotion::estimate).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
        .route("/records", get(routes::records::list_records))
        .route("/records/{id}", get(routes::records::get_record))
        .route("/records/{id}/export", get(routes::records::export_record))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
