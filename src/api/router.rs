use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::auth::require_auth;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Public routes, no authentication
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Protected routes, bearer token required when API_TOKEN is set
    let protected = Router::new()
        // Settings
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/languages", get(handlers::config::languages))
        // Calculator
        .route("/api/risk", post(handlers::risk::calculate))
        // Chart analysis
        .route("/api/analysis/parse", post(handlers::analysis::parse))
        .route("/api/analysis/prompt", post(handlers::analysis::prompt))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
