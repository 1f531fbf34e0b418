//! Equipment types service

use crate::{
    error::AppResult,
    models::equipment_type::{CreateEquipmentType, EquipmentType},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentTypesService {
    repository: Repository,
}

impl EquipmentTypesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentType>> {
        self.repository.equipment_types.list().await
    }

    /// Validate the form and insert; nothing is written when a field is invalid
    pub async fn create(&self, data: CreateEquipmentType) -> AppResult<EquipmentType> {
        let data = data.validated()?;
        let created = self.repository.equipment_types.create(&data).await?;
        tracing::info!(id = created.equipment_type_id, name = %created.equipment_name, "Created equipment type");
        Ok(created)
    }
}
