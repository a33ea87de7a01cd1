pub mod auth;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::store::Snapshot;
use auth::AuthPolicy;

#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
    pub auth: Arc<dyn AuthPolicy>,
}

pub fn build_router(state: AppState) -> Router {
    // "/" stays open; everything under /api requires the shared secret.
    let protected = Router::new()
        .route(
            "/api/vulnerabilities/ids",
            get(routes::vulnerabilities::list_ids),
        )
        .route(
            "/api/vulnerabilities/:vuln_id",
            get(routes::vulnerabilities::get_vulnerability),
        )
        .route("/api/assets/:asset_name", get(routes::assets::get_asset))
        .route("/api/stats", get(routes::stats::get_stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/", get(routes::status::service_status))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
