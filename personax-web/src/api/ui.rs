//! UI serving routes
//!
//! Serves the static HTML/JS pages for the quiz. The premium and about
//! pages are purely presentational.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const PREMIUM_HTML: &str = include_str!("../ui/premium.html");
const ABOUT_HTML: &str = include_str!("../ui/about.html");
const APP_JS: &str = include_str!("../ui/app.js");

/// GET /
///
/// Serves the quiz page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /premium
pub async fn serve_premium() -> Html<&'static str> {
    Html(PREMIUM_HTML)
}

/// GET /about
pub async fn serve_about() -> Html<&'static str> {
    Html(ABOUT_HTML)
}

/// GET /static/app.js
///
/// Serves the JavaScript application
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}
