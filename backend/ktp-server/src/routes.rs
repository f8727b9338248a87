use crate::{
    AppState, add_admin, create_record, get_admin, get_record, health, import_record, list_admins,
    maintenance, remove_admin, update_record, verify_record,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Probes
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Maintenance
        .route(
            "/maintenance/checkpoint",
            post(maintenance::checkpoint_handler),
        )
        // Administrators
        .route("/api/v1/admins", get(list_admins))
        .route(
            "/api/v1/admins/{account}",
            get(get_admin).put(add_admin).delete(remove_admin),
        )
        // Identity records
        .route("/api/v1/records", post(create_record).put(update_record))
        .route("/api/v1/records/import", post(import_record))
        .route("/api/v1/records/{account}", get(get_record))
        .route("/api/v1/records/{account}/verify", post(verify_record))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
