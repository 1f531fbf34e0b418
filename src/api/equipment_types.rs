//! Equipment type endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppResult, ErrorResponse},
    models::equipment_type::{CreateEquipmentType, EquipmentType},
};

/// List equipment types
#[utoipa::path(
    get,
    path = "/equipment-types",
    tag = "equipment-types",
    responses(
        (status = 200, description = "Equipment types ordered by name", body = Vec<EquipmentType>)
    )
)]
pub async fn list_equipment_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let types = state.services.equipment_types.list().await?;
    Ok(Json(types))
}

/// Create an equipment type from the "Add Equipment Type" form
#[utoipa::path(
    post,
    path = "/equipment-types",
    tag = "equipment-types",
    request_body = CreateEquipmentType,
    responses(
        (status = 201, description = "Equipment type created", body = EquipmentType),
        (status = 422, description = "Field errors, keyed by field name", body = ErrorResponse)
    )
)]
pub async fn create_equipment_type(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipmentType>,
) -> AppResult<(StatusCode, Json<EquipmentType>)> {
    let created = state.services.equipment_types.create(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
