use std::sync::Arc;

use axum::{middleware, routing::get, Router};

pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

use clock::Clock;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::index))
        .route("/health", get(http::handlers::health))
        .route("/add/{operands}", get(http::handlers::add))
        .route("/subtract/{operands}", get(http::handlers::subtract))
        .route("/multiply/{operands}", get(http::handlers::multiply))
        .route("/divide/{operands}", get(http::handlers::divide))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
