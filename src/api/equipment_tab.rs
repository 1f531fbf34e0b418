//! Equipment tab endpoints
//!
//! A client mounts a tab view once, then sends field updates, actions and
//! signals against the returned session id. Every call answers with the full
//! re-rendered view and the effects to apply.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        equipment::{ExportQuery, ListingQuery},
        equipment_tab::{FieldUpdate, TabAction},
        signals::InboundSignal,
    },
    services::{
        equipment_tab::TabView,
        export::{EXPORT_FILE_NAME, XLSX_CONTENT_TYPE},
    },
};

fn xlsx_response(bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Mount a new equipment tab view
#[utoipa::path(
    post,
    path = "/equipment-tab",
    tag = "equipment",
    responses(
        (status = 201, description = "Tab mounted and rendered", body = TabView)
    )
)]
pub async fn mount_tab(
    State(state): State<crate::AppState>,
) -> AppResult<(StatusCode, Json<TabView>)> {
    let view = state.services.equipment_tab.mount().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Render the current page of a tab view
#[utoipa::path(
    get,
    path = "/equipment-tab/{session}",
    tag = "equipment",
    params(("session" = Uuid, Path, description = "Tab session ID")),
    responses(
        (status = 200, description = "Rendered tab", body = TabView),
        (status = 404, description = "Unknown or expired session")
    )
)]
pub async fn render_tab(
    State(state): State<crate::AppState>,
    Path(session): Path<Uuid>,
) -> AppResult<Json<TabView>> {
    let view = state.services.equipment_tab.render(session).await?;
    Ok(Json(view))
}

/// Update one bound field
#[utoipa::path(
    put,
    path = "/equipment-tab/{session}/fields",
    tag = "equipment",
    params(("session" = Uuid, Path, description = "Tab session ID")),
    request_body = FieldUpdate,
    responses(
        (status = 200, description = "Rendered tab", body = TabView),
        (status = 400, description = "Invalid value"),
        (status = 404, description = "Unknown or expired session")
    )
)]
pub async fn update_field(
    State(state): State<crate::AppState>,
    Path(session): Path<Uuid>,
    Json(update): Json<FieldUpdate>,
) -> AppResult<Json<TabView>> {
    let view = state.services.equipment_tab.update_field(session, update).await?;
    Ok(Json(view))
}

/// Run a tab action
#[utoipa::path(
    post,
    path = "/equipment-tab/{session}/actions",
    tag = "equipment",
    params(("session" = Uuid, Path, description = "Tab session ID")),
    request_body = TabAction,
    responses(
        (status = 200, description = "Rendered tab", body = TabView),
        (status = 404, description = "Unknown or expired session")
    )
)]
pub async fn perform_action(
    State(state): State<crate::AppState>,
    Path(session): Path<Uuid>,
    Json(action): Json<TabAction>,
) -> AppResult<Json<TabView>> {
    let view = state.services.equipment_tab.perform(session, action).await?;
    Ok(Json(view))
}

/// Deliver a signal from a sibling component
#[utoipa::path(
    post,
    path = "/equipment-tab/{session}/signals",
    tag = "equipment",
    params(("session" = Uuid, Path, description = "Tab session ID")),
    request_body = InboundSignal,
    responses(
        (status = 200, description = "Rendered tab", body = TabView),
        (status = 404, description = "Unknown or expired session")
    )
)]
pub async fn receive_signal(
    State(state): State<crate::AppState>,
    Path(session): Path<Uuid>,
    Json(signal): Json<InboundSignal>,
) -> AppResult<Json<TabView>> {
    let view = state.services.equipment_tab.receive(session, signal).await?;
    Ok(Json(view))
}

/// Drop a tab view
#[utoipa::path(
    delete,
    path = "/equipment-tab/{session}",
    tag = "equipment",
    params(("session" = Uuid, Path, description = "Tab session ID")),
    responses(
        (status = 204, description = "Session removed")
    )
)]
pub async fn unmount_tab(
    State(state): State<crate::AppState>,
    Path(session): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.equipment_tab.unmount(session).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Download the tab's listing as `equipment.xlsx`
#[utoipa::path(
    get,
    path = "/equipment-tab/{session}/export",
    tag = "equipment",
    params(("session" = Uuid, Path, description = "Tab session ID")),
    responses(
        (status = 200, description = "XLSX workbook", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 404, description = "Unknown or expired session")
    )
)]
pub async fn export_tab(
    State(state): State<crate::AppState>,
    Path(session): Path<Uuid>,
) -> AppResult<Response> {
    let bytes = state.services.equipment_tab.export(session).await?;
    Ok(xlsx_response(bytes))
}

/// Download the listing for explicit filter, search and sort parameters
#[utoipa::path(
    get,
    path = "/equipment/export",
    tag = "equipment",
    params(ExportQuery),
    responses(
        (status = 200, description = "XLSX workbook", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 400, description = "Invalid parameter")
    )
)]
pub async fn export_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<Response> {
    let query = ListingQuery::from(query);
    let bytes = state.services.equipment_tab.export_listing(&query).await?;
    Ok(xlsx_response(bytes))
}
