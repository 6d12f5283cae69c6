//! personax-web library - quiz HTTP service
//!
//! Serves the quiz page, the presentational premium/about pages, and a
//! small JSON API over a shared immutable catalog. Each request is an
//! isolated unit of work; no state survives a submission.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use personax_core::Catalog;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Question catalog (immutable after startup)
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/premium", get(api::serve_premium))
        .route("/about", get(api::serve_about))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/questions", get(api::get_questions))
        .route("/api/score", post(api::score_submission))
        .route("/api/export", post(api::export_submission))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
