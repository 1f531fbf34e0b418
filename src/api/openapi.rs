//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment_tab, equipment_types, health, navigation};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Panel API",
        version = "0.1.0",
        description = "Equipment inventory administration panel"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Navigation
        navigation::get_navigation,
        // Equipment tab
        equipment_tab::mount_tab,
        equipment_tab::render_tab,
        equipment_tab::update_field,
        equipment_tab::perform_action,
        equipment_tab::receive_signal,
        equipment_tab::unmount_tab,
        equipment_tab::export_tab,
        equipment_tab::export_equipment,
        // Equipment types
        equipment_types::list_equipment_types,
        equipment_types::create_equipment_type,
    ),
    components(
        schemas(
            health::HealthResponse,
            navigation::NavigationResponse,
            crate::models::navigation::Sidebar,
            crate::models::navigation::SidebarItem,
            crate::models::navigation::SidebarTab,
            crate::services::equipment_tab::TabView,
            crate::models::equipment_tab::EquipmentTab,
            crate::models::equipment_tab::FieldUpdate,
            crate::models::equipment_tab::TabAction,
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentId,
            crate::models::equipment::EquipmentRow,
            crate::models::equipment::EquipmentPage,
            crate::models::equipment::EquipmentColumn,
            crate::models::equipment::SortDirection,
            crate::models::equipment::ListingFilters,
            crate::models::lookup::Lookups,
            crate::models::lookup::EmployeeOption,
            crate::models::lookup::UnitOption,
            crate::models::lookup::LocationOption,
            crate::models::lookup::DropdownOption,
            crate::models::lookup::DropdownOptions,
            crate::models::signals::Effects,
            crate::models::signals::InboundSignal,
            crate::models::signals::ComponentEvent,
            crate::models::signals::BrowserEvent,
            crate::models::equipment_type::EquipmentType,
            crate::models::equipment_type::CreateEquipmentType,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "navigation", description = "Sidebar navigation"),
        (name = "equipment", description = "Equipment tab and export"),
        (name = "equipment-types", description = "Equipment type management"),
    )
)]
pub struct ApiDoc;

/// Create router for OpenAPI documentation
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
