//! healthlens-server
//!
//! HTTP layer: symptom analysis and PDF export routes over axum.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use state::AppState;

/// Build the application router.
///
/// When `static_dir` is given, paths without a route are served from it,
/// which is how the browser front end is delivered. The crate ships one in
/// `static/`; point `HEALTHLENS_STATIC_DIR` at it, or at a replacement.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/analyze", post(routes::analyze::analyze))
        .route("/export_pdf", post(routes::export::export_pdf));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(axum_mw::from_fn(middleware::logging::log_request))
        .layer(cors)
        .with_state(state)
}
