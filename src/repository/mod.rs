//! Repository layer for database operations

pub mod equipment;
pub mod equipment_types;
pub mod lookups;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub equipment_types: equipment_types::EquipmentTypesRepository,
    pub lookups: lookups::LookupsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool.
    ///
    /// `personnel_schema` names the schema holding employee, unit and division;
    /// it must already be checked as a plain identifier.
    pub fn new(pool: Pool<Postgres>, personnel_schema: &str) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone(), personnel_schema.to_string()),
            equipment_types: equipment_types::EquipmentTypesRepository::new(pool.clone()),
            lookups: lookups::LookupsRepository::new(pool.clone(), personnel_schema.to_string()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
