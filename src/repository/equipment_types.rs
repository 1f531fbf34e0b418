//! Equipment types repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::equipment_type::{CreateEquipmentType, EquipmentType},
};

#[derive(Clone)]
pub struct EquipmentTypesRepository {
    pool: Pool<Postgres>,
}

impl EquipmentTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentType>> {
        let rows = sqlx::query_as::<_, EquipmentType>(
            "SELECT equipment_type_id, equipment_name, description FROM equipment_type ORDER BY equipment_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &CreateEquipmentType) -> AppResult<EquipmentType> {
        let row = sqlx::query_as::<_, EquipmentType>(
            r#"
            INSERT INTO equipment_type (equipment_name, description)
            VALUES ($1, $2)
            RETURNING equipment_type_id, equipment_name, description
            "#,
        )
        .bind(&data.equipment_name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
