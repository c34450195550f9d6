use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod handlers;
pub mod requests;
pub mod responses;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::get_health))
        .route("/api/predict-risk", post(handlers::post_predict_risk))
        .route("/api/road-segments", get(handlers::get_road_segments))
        .route("/api/climate-scenario", post(handlers::post_climate_scenario))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/map/{renderer}", get(handlers::get_map))
        .with_state(state)
}

/// Wrap the router in a permissive CORS layer for browser dashboards.
pub fn with_cors(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);
    router.layer(cors)
}
