//! Equipment listing queries
//!
//! The listing joins equipment with its type, the accountable employee, the
//! employee's unit and division (personnel schema) and the location. Filters on
//! base columns go inside the joined relation; searches on computed labels go on
//! a derived table wrapping the projection, since those labels do not exist
//! until the projection is evaluated.

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::AppResult,
    models::equipment::{EquipmentColumn, EquipmentRow, ListingQuery},
};

const LISTING_PROJECTION: &str = "e.equipment_id, e.equipment_type_id, e.property_number, \
    e.brand, e.model, e.serial_number, e.description, e.person_accountable_id, \
    e.person_accountable_unit_id, e.location_id, e.acquired_date, \
    et.equipment_name, \
    COALESCE(NULLIF(CONCAT_WS(', ', NULLIF(TRIM(emp.lastname), ''), NULLIF(TRIM(emp.firstname), '')), ''), 'Unknown') AS name, \
    l.description AS location_description, \
    u.unit_code || '/' || d.division_code AS section_division";

/// Escape LIKE metacharacters and turn the term into a prefix pattern
pub fn prefix_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 1);
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_prefix_match(qb: &mut QueryBuilder<'_, Postgres>, expr: &str, column: EquipmentColumn, term: &str) {
    if column.is_text() {
        qb.push(expr);
    } else {
        qb.push("CAST(").push(expr).push(" AS TEXT)");
    }
    qb.push(" LIKE ").push_bind(prefix_pattern(term));
}

/// `FROM (<joined, filtered relation>) AS listing [WHERE <computed-label search>]`
fn push_filtered_listing(qb: &mut QueryBuilder<'_, Postgres>, schema: &str, query: &ListingQuery) {
    qb.push("FROM (SELECT ")
        .push(LISTING_PROJECTION)
        .push(" FROM equipment e")
        .push(" INNER JOIN equipment_type et ON e.equipment_type_id = et.equipment_type_id")
        .push(format!(
            " INNER JOIN {schema}.employee emp ON e.person_accountable_id = emp.employee_id \
             LEFT JOIN {schema}.unit u ON e.person_accountable_unit_id = u.unit_id \
             LEFT JOIN {schema}.division d ON d.division_id = u.unit_div",
            schema = schema
        ))
        .push(" LEFT JOIN location l ON e.location_id = l.location_id")
        .push(" WHERE 1=1");

    if let Some(person) = query.filters.person {
        qb.push(" AND e.person_accountable_id = ").push_bind(person);
    }
    if let Some(location) = query.filters.location {
        qb.push(" AND e.location_id = ").push_bind(location);
    }
    if let Some(date) = query.filters.date {
        qb.push(" AND CAST(e.acquired_date AS DATE) = ").push_bind(date);
    }

    let term = query.search.as_str();
    if !term.is_empty() {
        if let Some(base) = query.search_by.base_column() {
            qb.push(" AND ");
            push_prefix_match(qb, base, query.search_by, term);
        }
    }

    qb.push(") AS listing");

    if !term.is_empty() && query.search_by.is_computed() {
        qb.push(" WHERE ");
        let alias = format!("listing.{}", query.search_by.alias());
        push_prefix_match(qb, &alias, query.search_by, term);
    }
}

fn push_order(qb: &mut QueryBuilder<'_, Postgres>, query: &ListingQuery) {
    let direction = query.direction.as_sql();
    qb.push(" ORDER BY listing.")
        .push(query.order_by.alias())
        .push(" ")
        .push(direction);
    if query.order_by != EquipmentColumn::EquipmentId {
        qb.push(", listing.equipment_id ").push(direction);
    }
}

/// One page of the listing
pub fn listing_page_query(
    schema: &str,
    query: &ListingQuery,
    limit: i64,
    offset: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT listing.* ");
    push_filtered_listing(&mut qb, schema, query);
    push_order(&mut qb, query);
    qb.push(" LIMIT ").push_bind(limit);
    qb.push(" OFFSET ").push_bind(offset);
    qb
}

/// Every matching row, for export
pub fn listing_all_query(schema: &str, query: &ListingQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT listing.* ");
    push_filtered_listing(&mut qb, schema, query);
    push_order(&mut qb, query);
    qb
}

pub fn listing_count_query(schema: &str, query: &ListingQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) ");
    push_filtered_listing(&mut qb, schema, query);
    qb
}

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
    personnel_schema: String,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>, personnel_schema: String) -> Self {
        Self {
            pool,
            personnel_schema,
        }
    }

    /// Number of rows matching the query, across all pages
    pub async fn listing_count(&self, query: &ListingQuery) -> AppResult<i64> {
        let mut count = listing_count_query(&self.personnel_schema, query);
        let (total,): (i64,) = count.build_query_as().fetch_one(&self.pool).await?;
        Ok(total)
    }

    /// Fetch one page of the listing
    pub async fn listing_page(
        &self,
        query: &ListingQuery,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<EquipmentRow>> {
        let mut select = listing_page_query(&self.personnel_schema, query, limit, offset);
        let rows = select
            .build_query_as::<EquipmentRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn listing_all(&self, query: &ListingQuery) -> AppResult<Vec<EquipmentRow>> {
        let mut select = listing_all_query(&self.personnel_schema, query);
        let rows = select
            .build_query_as::<EquipmentRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Count all equipment, ignoring filters
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::equipment::{ListingFilters, SortDirection};
    use chrono::NaiveDate;

    fn query(search_by: EquipmentColumn, search: &str) -> ListingQuery {
        ListingQuery {
            search_by,
            search: search.to_string(),
            ..ListingQuery::default()
        }
    }

    fn outer_part(sql: &str) -> &str {
        let idx = sql.find(") AS listing").expect("derived table");
        &sql[idx..]
    }

    #[test]
    fn test_prefix_pattern_escapes_wildcards() {
        assert_eq!(prefix_pattern("Dell"), "Dell%");
        assert_eq!(prefix_pattern("100%_a\\b"), "100\\%\\_a\\\\b%");
    }

    #[test]
    fn test_raw_column_search_stays_inside_join() {
        let qb = listing_page_query("infosys", &query(EquipmentColumn::Brand, "Dell"), 10, 0);
        let sql = qb.sql();
        assert!(sql.contains("AND e.brand LIKE $1) AS listing"));
        assert!(!outer_part(sql).contains("WHERE"));
        assert!(sql.ends_with("ORDER BY listing.equipment_id ASC LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn test_computed_column_search_goes_on_the_alias() {
        for column in [EquipmentColumn::LocationDescription, EquipmentColumn::SectionDivision] {
            let qb = listing_count_query("infosys", &query(column, "Warehouse"));
            let sql = qb.sql();
            let outer = outer_part(sql);
            assert!(
                outer.contains(&format!("WHERE listing.{} LIKE $1", column.alias())),
                "{}",
                sql
            );
            assert!(!sql.contains(&format!("AND {} LIKE", column.alias())));
        }
    }

    #[test]
    fn test_empty_search_adds_no_predicate() {
        let qb = listing_count_query("infosys", &query(EquipmentColumn::SectionDivision, ""));
        assert!(!qb.sql().contains("LIKE"));
    }

    #[test]
    fn test_non_text_columns_are_cast() {
        let qb = listing_count_query("infosys", &query(EquipmentColumn::EquipmentId, "12"));
        assert!(qb.sql().contains("CAST(e.equipment_id AS TEXT) LIKE $1"));
    }

    #[test]
    fn test_filters_are_bound_in_order() {
        let q = ListingQuery {
            filters: ListingFilters {
                person: Some(42),
                location: Some(7),
                date: NaiveDate::from_ymd_opt(2024, 5, 2),
            },
            ..query(EquipmentColumn::Model, "Opti")
        };
        let qb = listing_page_query("infosys", &q, 25, 50);
        let sql = qb.sql();
        assert!(sql.contains("AND e.person_accountable_id = $1"));
        assert!(sql.contains("AND e.location_id = $2"));
        assert!(sql.contains("AND CAST(e.acquired_date AS DATE) = $3"));
        assert!(sql.contains("AND e.model LIKE $4"));
        assert!(sql.contains("LIMIT $5 OFFSET $6"));
    }

    #[test]
    fn test_joins_use_personnel_schema() {
        let qb = listing_count_query("hr", &ListingQuery::default());
        let sql = qb.sql();
        assert!(sql.starts_with("SELECT COUNT(*) FROM (SELECT "));
        assert!(sql.contains("INNER JOIN equipment_type et ON e.equipment_type_id = et.equipment_type_id"));
        assert!(sql.contains("INNER JOIN hr.employee emp ON e.person_accountable_id = emp.employee_id"));
        assert!(sql.contains("LEFT JOIN hr.unit u ON e.person_accountable_unit_id = u.unit_id"));
        assert!(sql.contains("LEFT JOIN hr.division d ON d.division_id = u.unit_div"));
        assert!(sql.contains("LEFT JOIN location l ON e.location_id = l.location_id"));
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn test_order_has_tie_breaker() {
        let q = ListingQuery {
            order_by: EquipmentColumn::Name,
            direction: SortDirection::Desc,
            ..ListingQuery::default()
        };
        let qb = listing_all_query("infosys", &q);
        assert!(qb
            .sql()
            .ends_with("ORDER BY listing.name DESC, listing.equipment_id DESC"));
    }
}
