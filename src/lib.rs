pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {
    axum::{
        Router,
        extract::DefaultBodyLimit,
        http::StatusCode,
        routing::{get, post},
    },
    domain::provider::{SessionGateway, SettingsProvider},
    std::{sync::Arc, time::Duration},
    tower_http::{timeout::TimeoutLayer, trace::TraceLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<dyn SettingsProvider>,
    pub gateway: Arc<dyn SessionGateway>,
}

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/payments/reuse-session",
            post(adapters::reuse_session::reuse_session_handler),
        )
        .layer(DefaultBodyLimit::max(16 * 1024))
        // A request that outlives the timeout is stuck on the vendor, not on us.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
