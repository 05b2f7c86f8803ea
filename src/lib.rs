use axum::{middleware, routing::get, Router};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

pub fn build_app() -> Router {
    Router::new()
        .route("/echo", get(http::handlers::echo))
        .route("/health", get(http::handlers::health))
        .fallback(http::handlers::not_found)
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
