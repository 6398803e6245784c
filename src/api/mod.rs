use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::search::SearchEngine;

pub mod handlers;
pub mod models;

pub fn create_router(search_engine: Arc<SearchEngine>, cors_origins: &[String]) -> Router {
    // CORS configuration
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect();

    // Credentials rule out a literal `*` for headers, so echo what the browser asks for.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        // API routes
        .route("/api/search/", post(handlers::search_handler))
        .route("/api/search", post(handlers::search_handler))
        .route("/api/sites", get(handlers::sites_handler))
        .with_state(search_engine)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
