//! Equipment type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment type record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentType {
    pub equipment_type_id: i32,
    /// Type name shown in the equipment table
    pub equipment_name: String,
    pub description: Option<String>,
}

/// Payload of the "Add Equipment Type" form
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentType {
    #[serde(default)]
    #[validate(length(min = 1, message = "The equipment name field is required."))]
    pub equipment_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The description field is required."))]
    pub description: String,
}

impl CreateEquipmentType {
    /// Trim both fields and check they are filled in
    pub fn validated(self) -> Result<Self, validator::ValidationErrors> {
        let form = Self {
            equipment_name: self.equipment_name.trim().to_string(),
            description: self.description.trim().to_string(),
        };
        form.validate()?;
        Ok(form)
    }
}
