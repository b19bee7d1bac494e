//! Router construction for the stand server.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use stand_core::StandService;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Build the full axum router with all routes and middleware.
pub fn build_router(service: Arc<StandService>) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/stands/", get(handlers::stands::list_stands))
        .route("/stands/:stand_oid/", get(handlers::stands::get_stand))
        .route("/stands/:stand_oid", get(handlers::stands::get_stand))
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}
