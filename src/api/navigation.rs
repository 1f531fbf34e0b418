//! Sidebar navigation endpoint

use axum::{extract::Query, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::navigation::{Sidebar, SidebarItem};

#[derive(Serialize, ToSchema)]
pub struct NavigationResponse {
    pub sidebar: Sidebar,
    pub items: Vec<SidebarItem>,
}

/// Sidebar entries, flagged against the active tab
#[utoipa::path(
    get,
    path = "/navigation",
    tag = "navigation",
    params(Sidebar),
    responses(
        (status = 200, description = "Sidebar entries", body = NavigationResponse)
    )
)]
pub async fn get_navigation(Query(sidebar): Query<Sidebar>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        items: sidebar.items(),
        sidebar,
    })
}
