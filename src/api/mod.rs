//! API handlers for the equipment panel REST endpoints

pub mod equipment_tab;
pub mod equipment_types;
pub mod health;
pub mod navigation;
pub mod openapi;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Sidebar
        .route("/navigation", get(navigation::get_navigation))
        // Equipment tab
        .route("/equipment-tab", post(equipment_tab::mount_tab))
        .route(
            "/equipment-tab/:session",
            get(equipment_tab::render_tab).delete(equipment_tab::unmount_tab),
        )
        .route("/equipment-tab/:session/fields", put(equipment_tab::update_field))
        .route("/equipment-tab/:session/actions", post(equipment_tab::perform_action))
        .route("/equipment-tab/:session/signals", post(equipment_tab::receive_signal))
        .route("/equipment-tab/:session/export", get(equipment_tab::export_tab))
        .route("/equipment/export", get(equipment_tab::export_equipment))
        // Equipment types
        .route(
            "/equipment-types",
            get(equipment_types::list_equipment_types).post(equipment_types::create_equipment_type),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
