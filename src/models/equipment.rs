//! Equipment model and listing vocabulary

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Equipment primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct EquipmentId(pub i32);

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub equipment_id: EquipmentId,
    pub equipment_type_id: i32,
    pub property_number: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    /// Employee accountable for the asset
    pub person_accountable_id: i32,
    /// Unit the accountable employee answered to when the asset was assigned
    pub person_accountable_unit_id: Option<i32>,
    pub location_id: Option<i32>,
    pub acquired_date: Option<NaiveDateTime>,
}

/// One row of the equipment table: the equipment joined with its labels
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub equipment: Equipment,
    /// Equipment type name
    pub equipment_name: String,
    /// Accountable person, `lastname, firstname`
    pub name: String,
    pub location_description: Option<String>,
    /// `unit_code/division_code`, absent unless both codes are known
    pub section_division: Option<String>,
}

impl EquipmentRow {
    /// Display value of a listing column
    pub fn value(&self, column: EquipmentColumn) -> Option<String> {
        let e = &self.equipment;
        match column {
            EquipmentColumn::EquipmentId => Some(e.equipment_id.to_string()),
            EquipmentColumn::PropertyNumber => e.property_number.clone(),
            EquipmentColumn::Brand => e.brand.clone(),
            EquipmentColumn::Model => e.model.clone(),
            EquipmentColumn::SerialNumber => e.serial_number.clone(),
            EquipmentColumn::Description => e.description.clone(),
            EquipmentColumn::AcquiredDate => e.acquired_date.map(|d| d.format("%Y-%m-%d").to_string()),
            EquipmentColumn::EquipmentName => Some(self.equipment_name.clone()),
            EquipmentColumn::Name => Some(self.name.clone()),
            EquipmentColumn::LocationDescription => self.location_description.clone(),
            EquipmentColumn::SectionDivision => self.section_division.clone(),
        }
    }
}

/// Columns of the equipment listing that can be searched or sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentColumn {
    EquipmentId,
    PropertyNumber,
    Brand,
    Model,
    SerialNumber,
    Description,
    AcquiredDate,
    EquipmentName,
    Name,
    LocationDescription,
    SectionDivision,
}

impl EquipmentColumn {
    pub const ALL: [EquipmentColumn; 11] = [
        EquipmentColumn::EquipmentId,
        EquipmentColumn::PropertyNumber,
        EquipmentColumn::Brand,
        EquipmentColumn::Model,
        EquipmentColumn::SerialNumber,
        EquipmentColumn::Description,
        EquipmentColumn::AcquiredDate,
        EquipmentColumn::EquipmentName,
        EquipmentColumn::Name,
        EquipmentColumn::LocationDescription,
        EquipmentColumn::SectionDivision,
    ];

    /// Name of the column in the projected listing
    pub fn alias(self) -> &'static str {
        match self {
            EquipmentColumn::EquipmentId => "equipment_id",
            EquipmentColumn::PropertyNumber => "property_number",
            EquipmentColumn::Brand => "brand",
            EquipmentColumn::Model => "model",
            EquipmentColumn::SerialNumber => "serial_number",
            EquipmentColumn::Description => "description",
            EquipmentColumn::AcquiredDate => "acquired_date",
            EquipmentColumn::EquipmentName => "equipment_name",
            EquipmentColumn::Name => "name",
            EquipmentColumn::LocationDescription => "location_description",
            EquipmentColumn::SectionDivision => "section_division",
        }
    }

    /// Column on a joined base table, `None` for values derived in the projection
    pub fn base_column(self) -> Option<&'static str> {
        match self {
            EquipmentColumn::EquipmentId => Some("e.equipment_id"),
            EquipmentColumn::PropertyNumber => Some("e.property_number"),
            EquipmentColumn::Brand => Some("e.brand"),
            EquipmentColumn::Model => Some("e.model"),
            EquipmentColumn::SerialNumber => Some("e.serial_number"),
            EquipmentColumn::Description => Some("e.description"),
            EquipmentColumn::AcquiredDate => Some("e.acquired_date"),
            EquipmentColumn::EquipmentName => Some("et.equipment_name"),
            EquipmentColumn::Name
            | EquipmentColumn::LocationDescription
            | EquipmentColumn::SectionDivision => None,
        }
    }

    /// Computed columns only exist after projection and must be filtered there
    pub fn is_computed(self) -> bool {
        self.base_column().is_none()
    }

    /// Whether the column holds text (others are cast before a prefix match)
    pub fn is_text(self) -> bool {
        !matches!(self, EquipmentColumn::EquipmentId | EquipmentColumn::AcquiredDate)
    }

    /// Heading used for the column in the spreadsheet export
    pub fn heading(self) -> &'static str {
        match self {
            EquipmentColumn::EquipmentId => "ID",
            EquipmentColumn::PropertyNumber => "Property No.",
            EquipmentColumn::Brand => "Brand",
            EquipmentColumn::Model => "Model",
            EquipmentColumn::SerialNumber => "Serial No.",
            EquipmentColumn::Description => "Description",
            EquipmentColumn::AcquiredDate => "Date Acquired",
            EquipmentColumn::EquipmentName => "Type",
            EquipmentColumn::Name => "Person Accountable",
            EquipmentColumn::LocationDescription => "Location",
            EquipmentColumn::SectionDivision => "Section/Division",
        }
    }
}

impl fmt::Display for EquipmentColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

impl FromStr for EquipmentColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `equipment.id` is accepted for links built against the old listing
        if s == "equipment.id" {
            return Ok(EquipmentColumn::EquipmentId);
        }
        EquipmentColumn::ALL
            .into_iter()
            .find(|c| c.alias() == s)
            .ok_or_else(|| format!("unknown equipment column '{}'", s))
    }
}

/// Sort direction; toggling only ever flips between the two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// Exact-match filters; `None` means the filter is not applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListingFilters {
    /// Accountable employee id
    pub person: Option<i32>,
    pub location: Option<i32>,
    /// Acquisition day, time of day ignored
    pub date: Option<NaiveDate>,
}

impl ListingFilters {
    pub fn is_empty(&self) -> bool {
        self.person.is_none() && self.location.is_none() && self.date.is_none()
    }
}

/// Everything that decides which rows appear and in which order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub filters: ListingFilters,
    pub search_by: EquipmentColumn,
    pub search: String,
    pub order_by: EquipmentColumn,
    pub direction: SortDirection,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            filters: ListingFilters::default(),
            search_by: EquipmentColumn::EquipmentId,
            search: String::new(),
            order_by: EquipmentColumn::EquipmentId,
            direction: SortDirection::Asc,
        }
    }
}

/// Query parameters of the stateless export; empty values count as unset
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// Accountable employee id
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub person: Option<i32>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub location: Option<i32>,
    /// Acquisition day (YYYY-MM-DD)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub date: Option<NaiveDate>,
    /// Column the search term applies to (default: equipment_id)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub search_by: Option<EquipmentColumn>,
    #[serde(default)]
    pub search: Option<String>,
    /// Sort column (default: equipment_id)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub order_by: Option<EquipmentColumn>,
    /// asc or desc (default: asc)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub direction: Option<SortDirection>,
}

impl From<ExportQuery> for ListingQuery {
    fn from(q: ExportQuery) -> Self {
        let defaults = ListingQuery::default();
        Self {
            filters: ListingFilters {
                person: q.person,
                location: q.location,
                date: q.date,
            },
            search_by: q.search_by.unwrap_or(defaults.search_by),
            search: q.search.unwrap_or_default(),
            order_by: q.order_by.unwrap_or(defaults.order_by),
            direction: q.direction.unwrap_or(defaults.direction),
        }
    }
}

/// A page of the listing plus what the summary line needs
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentPage {
    pub rows: Vec<EquipmentRow>,
    /// Rows matching the current filters, across all pages
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub last_page: i64,
}

/// Number of pages needed for `total` rows; an empty listing still has page 1
pub fn last_page(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        1
    } else {
        (total + per_page - 1) / per_page
    }
}

impl EquipmentPage {
    pub fn new(rows: Vec<EquipmentRow>, total: i64, page: i64, per_page: i64) -> Self {
        Self {
            rows,
            total,
            page,
            per_page,
            last_page: last_page(total, per_page),
        }
    }
}
