//! HTTP API handlers for personax-web

pub mod health;
pub mod quiz;
pub mod ui;

pub use health::health_routes;
pub use quiz::{export_submission, get_questions, score_submission};
pub use ui::{serve_about, serve_app_js, serve_index, serve_premium};
