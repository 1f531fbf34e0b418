//! Dropdown sources for the equipment filters

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Label used when an employee has neither a last nor a first name on file
pub const UNKNOWN_PERSON: &str = "Unknown";

/// `lastname, firstname`, skipping a missing part.
///
/// Mirrors the SQL expression used for the listing's `name` column.
pub fn full_name(lastname: Option<&str>, firstname: Option<&str>) -> String {
    let parts: Vec<&str> = [lastname, firstname]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        UNKNOWN_PERSON.to_string()
    } else {
        parts.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EmployeeOption {
    pub employee_id: i32,
    pub lastname: Option<String>,
    pub firstname: Option<String>,
}

impl EmployeeOption {
    pub fn label(&self) -> String {
        full_name(self.lastname.as_deref(), self.firstname.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UnitOption {
    pub unit_id: i32,
    pub unit_code: Option<String>,
    pub unit_div: Option<i32>,
    pub division_code: Option<String>,
}

impl UnitOption {
    /// `unit_code/division_code`, or just the unit code for a unit without division
    pub fn label(&self) -> String {
        match (&self.unit_code, &self.division_code) {
            (Some(unit), Some(division)) => format!("{}/{}", unit, division),
            (Some(unit), None) => unit.clone(),
            (None, _) => format!("#{}", self.unit_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LocationOption {
    pub location_id: i32,
    pub description: Option<String>,
    pub status: i16,
}

/// Value/label pair as rendered in a select widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DropdownOption {
    pub value: i32,
    pub label: String,
}

impl From<&EmployeeOption> for DropdownOption {
    fn from(e: &EmployeeOption) -> Self {
        Self {
            value: e.employee_id,
            label: e.label(),
        }
    }
}

impl From<&UnitOption> for DropdownOption {
    fn from(u: &UnitOption) -> Self {
        Self {
            value: u.unit_id,
            label: u.label(),
        }
    }
}

impl From<&LocationOption> for DropdownOption {
    fn from(l: &LocationOption) -> Self {
        Self {
            value: l.location_id,
            label: l.description.clone().unwrap_or_default(),
        }
    }
}

/// Filter dropdown contents, ready for select widgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DropdownOptions {
    pub employees: Vec<DropdownOption>,
    pub units: Vec<DropdownOption>,
    pub locations: Vec<DropdownOption>,
}

/// All lookups loaded when the equipment tab is mounted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Lookups {
    pub employees: Vec<EmployeeOption>,
    pub units: Vec<UnitOption>,
    pub locations: Vec<LocationOption>,
}

impl Lookups {
    pub fn employee_options(&self) -> Vec<DropdownOption> {
        self.employees.iter().map(DropdownOption::from).collect()
    }

    pub fn unit_options(&self) -> Vec<DropdownOption> {
        self.units.iter().map(DropdownOption::from).collect()
    }

    pub fn location_options(&self) -> Vec<DropdownOption> {
        self.locations.iter().map(DropdownOption::from).collect()
    }

    pub fn options(&self) -> DropdownOptions {
        DropdownOptions {
            employees: self.employee_options(),
            units: self.unit_options(),
            locations: self.location_options(),
        }
    }
}
