//! Read-only lookups feeding the filter dropdowns

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::lookup::{EmployeeOption, LocationOption, UnitOption},
};

#[derive(Clone)]
pub struct LookupsRepository {
    pool: Pool<Postgres>,
    personnel_schema: String,
}

impl LookupsRepository {
    pub fn new(pool: Pool<Postgres>, personnel_schema: String) -> Self {
        Self {
            pool,
            personnel_schema,
        }
    }

    /// Employees ordered by last name
    pub async fn employees(&self) -> AppResult<Vec<EmployeeOption>> {
        let query = format!(
            "SELECT employee_id, lastname, firstname FROM {}.employee ORDER BY lastname ASC",
            self.personnel_schema
        );
        let rows = sqlx::query_as::<_, EmployeeOption>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Units with the code of the division they belong to
    pub async fn units(&self) -> AppResult<Vec<UnitOption>> {
        let query = format!(
            r#"
            SELECT u.unit_id, u.unit_code, u.unit_div, d.division_code
            FROM {schema}.unit u
            LEFT JOIN {schema}.division d ON d.division_id = u.unit_div
            "#,
            schema = self.personnel_schema
        );
        let rows = sqlx::query_as::<_, UnitOption>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Active locations (status = 1)
    pub async fn locations(&self) -> AppResult<Vec<LocationOption>> {
        let rows = sqlx::query_as::<_, LocationOption>(
            "SELECT location_id, description, status FROM location WHERE status = 1",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
