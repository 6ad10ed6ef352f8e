use crate::handler::health::health_handler;
use crate::handler::servlet::servlet_handler;
use crate::sink::LogSink;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Build the HTTP router (health + servlet).
pub fn app_router(sink: Arc<dyn LogSink>) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let servlet_router = Router::new()
        .route("/servlet", post(servlet_handler))
        .with_state(sink);

    Router::new()
        .merge(v1_health_router)
        .merge(servlet_router)
}
