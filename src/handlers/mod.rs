//! HTTP handlers module
//!
//! Router of the gate server: every page path goes through the route gate

pub mod health;
pub mod page;

use crate::config::Settings;
use crate::middleware::{request_logging_middleware, route_gate};
use axum::{middleware::from_fn, middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
}

/// Create application router
pub fn create_router(settings: Settings) -> Router {
    let app_state = Arc::new(AppState { settings });

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_logging_middleware));

    // Routes added after the gate layer are not gated
    Router::new()
        .fallback(page::page_placeholder)
        .layer(from_fn_with_state(app_state.clone(), route_gate))
        .route("/health", get(health::health_check))
        .with_state(app_state)
        .layer(middleware_stack)
}
