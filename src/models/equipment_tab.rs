//! State of one equipment tab view and the transitions between interactions
//!
//! The tab is a server-held component: every interaction loads it, applies one
//! field update, action or signal, stores it back and renders the listing from
//! the resulting state. Transitions are plain methods returning the [`Effects`]
//! to forward to the browser and sibling components.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    equipment::{EquipmentColumn, EquipmentId, ListingFilters, ListingQuery, SortDirection},
    lookup::Lookups,
    signals::{BrowserEvent, ComponentEvent, Effects, InboundSignal},
};
use crate::{
    config::PanelConfig,
    error::{AppError, AppResult},
};

/// Fields the client can bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabField {
    SearchString,
    SearchBy,
    OrderBy,
    OrderDirection,
    PerPage,
    PersonFilter,
    LocationFilter,
    DateFilter,
    AddEquipmentOpen,
}

/// What happens to the rest of the state after a field changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEffect {
    None,
    /// Back to page 1
    ResetPage,
    /// Clear filters, back to page 1, clear the filter widgets
    Refresh,
}

const FIELD_EFFECTS: [(TabField, FieldEffect); 9] = [
    (TabField::SearchString, FieldEffect::None),
    (TabField::SearchBy, FieldEffect::Refresh),
    (TabField::OrderBy, FieldEffect::Refresh),
    (TabField::OrderDirection, FieldEffect::Refresh),
    (TabField::PerPage, FieldEffect::Refresh),
    (TabField::PersonFilter, FieldEffect::ResetPage),
    (TabField::LocationFilter, FieldEffect::ResetPage),
    (TabField::DateFilter, FieldEffect::ResetPage),
    (TabField::AddEquipmentOpen, FieldEffect::None),
];

pub fn effect_of(field: TabField) -> FieldEffect {
    FIELD_EFFECTS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, effect)| *effect)
        .unwrap_or(FieldEffect::None)
}

/// A new value for one bound field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    SearchString(String),
    SearchBy(EquipmentColumn),
    OrderBy(EquipmentColumn),
    OrderDirection(SortDirection),
    PerPage(i64),
    PersonFilter(Option<i32>),
    LocationFilter(Option<i32>),
    DateFilter(Option<NaiveDate>),
    AddEquipmentOpen(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> TabField {
        match self {
            FieldUpdate::SearchString(_) => TabField::SearchString,
            FieldUpdate::SearchBy(_) => TabField::SearchBy,
            FieldUpdate::OrderBy(_) => TabField::OrderBy,
            FieldUpdate::OrderDirection(_) => TabField::OrderDirection,
            FieldUpdate::PerPage(_) => TabField::PerPage,
            FieldUpdate::PersonFilter(_) => TabField::PersonFilter,
            FieldUpdate::LocationFilter(_) => TabField::LocationFilter,
            FieldUpdate::DateFilter(_) => TabField::DateFilter,
            FieldUpdate::AddEquipmentOpen(_) => TabField::AddEquipmentOpen,
        }
    }
}

/// User actions on the tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TabAction {
    Refresh,
    /// Apply the filter values already bound
    Filter,
    /// Run the bound search string
    Search,
    ClearSearch,
    SetOrderBy { column: EquipmentColumn },
    ToggleOrderDirection,
    GotoPage { page: i64 },
    NextPage,
    PreviousPage,
    EditItem { equipment_id: EquipmentId },
    OpenHistory { equipment_id: EquipmentId },
    OpenAddEquipment,
}

/// Server-held state of one equipment tab view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentTab {
    pub search_string: String,
    pub search_by: EquipmentColumn,
    pub order_by: EquipmentColumn,
    pub order_direction: SortDirection,
    pub per_page: i64,
    pub page: i64,
    pub filters: ListingFilters,
    pub add_equipment_open: bool,
    /// Equipment count at mount time, unaffected by filters
    pub total_equipments: i64,
    pub lookups: Lookups,
}

impl EquipmentTab {
    pub fn new(per_page: i64) -> Self {
        Self {
            search_string: String::new(),
            search_by: EquipmentColumn::Brand,
            order_by: EquipmentColumn::EquipmentId,
            order_direction: SortDirection::Desc,
            per_page,
            page: 1,
            filters: ListingFilters::default(),
            add_equipment_open: false,
            total_equipments: 0,
            lookups: Lookups::default(),
        }
    }

    pub fn listing_query(&self) -> ListingQuery {
        ListingQuery {
            filters: self.filters.clone(),
            search_by: self.search_by,
            search: self.search_string.clone(),
            order_by: self.order_by,
            direction: self.order_direction,
        }
    }

    /// Row offset of the current page; saturates for pages far past the end
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Clear filters and pagination, and tell the filter widgets to forget their selection
    pub fn refresh(&mut self) -> Effects {
        self.filters = ListingFilters::default();
        self.reset_page();
        let mut effects = Effects::none();
        effects.dispatch(BrowserEvent::ClearEmployeeFilter);
        effects.dispatch(BrowserEvent::ClearLocationFilter);
        effects
    }

    /// Apply a bound field change and the side effect registered for that field
    pub fn update(&mut self, update: FieldUpdate, panel: &PanelConfig) -> AppResult<Effects> {
        let field = update.field();
        match update {
            FieldUpdate::SearchString(value) => self.search_string = value,
            FieldUpdate::SearchBy(column) => self.search_by = column,
            FieldUpdate::OrderBy(column) => self.order_by = column,
            FieldUpdate::OrderDirection(direction) => self.order_direction = direction,
            FieldUpdate::PerPage(per_page) => {
                if !panel.per_page_choices.contains(&per_page) {
                    return Err(AppError::Validation(format!(
                        "per_page must be one of {:?}",
                        panel.per_page_choices
                    )));
                }
                self.per_page = per_page;
            }
            FieldUpdate::PersonFilter(person) => self.filters.person = person,
            FieldUpdate::LocationFilter(location) => self.filters.location = location,
            FieldUpdate::DateFilter(date) => self.filters.date = date,
            FieldUpdate::AddEquipmentOpen(open) => self.add_equipment_open = open,
        }

        let mut effects = match effect_of(field) {
            FieldEffect::None => Effects::none(),
            FieldEffect::ResetPage => {
                self.reset_page();
                Effects::none()
            }
            FieldEffect::Refresh => self.refresh(),
        };
        effects.dispatch(BrowserEvent::RefreshAlpine);
        Ok(effects)
    }

    pub fn perform(&mut self, action: TabAction, panel: &PanelConfig) -> AppResult<Effects> {
        let effects = match action {
            TabAction::Refresh | TabAction::Search => self.refresh(),
            TabAction::Filter => {
                self.reset_page();
                Effects::none()
            }
            TabAction::ClearSearch => {
                self.search_string.clear();
                self.refresh()
            }
            TabAction::SetOrderBy { column } => {
                return self.update(FieldUpdate::OrderBy(column), panel);
            }
            TabAction::ToggleOrderDirection => {
                let direction = self.order_direction.toggled();
                return self.update(FieldUpdate::OrderDirection(direction), panel);
            }
            TabAction::GotoPage { page } => {
                if page < 1 {
                    return Err(AppError::Validation("page must be at least 1".to_string()));
                }
                self.page = page;
                Effects::none()
            }
            TabAction::NextPage => {
                self.page += 1;
                Effects::none()
            }
            TabAction::PreviousPage => {
                self.page = (self.page - 1).max(1);
                Effects::none()
            }
            TabAction::EditItem { equipment_id } => {
                let mut effects = Effects::none();
                effects.emit(ComponentEvent::OpenEditEquipment(equipment_id));
                effects
            }
            TabAction::OpenHistory { equipment_id } => {
                let mut effects = Effects::none();
                effects.emit(ComponentEvent::OpenEquipmentHistory(equipment_id));
                effects
            }
            TabAction::OpenAddEquipment => {
                self.add_equipment_open = true;
                Effects::none()
            }
        };
        Ok(effects)
    }

    pub fn receive(&mut self, signal: InboundSignal, panel: &PanelConfig) -> Effects {
        match signal {
            InboundSignal::RefreshEquipment => self.refresh(),
            InboundSignal::NewEquipmentAdded => {
                let mut effects = Effects::none();
                effects.redirect_to(panel.dashboard_route.clone());
                effects
            }
            InboundSignal::CloseAddEquipment => {
                self.add_equipment_open = false;
                Effects::none()
            }
        }
    }

    /// Pull the page back inside the listing after the row count is known
    pub fn clamp_page(&mut self, last_page: i64) -> bool {
        let clamped = self.page.clamp(1, last_page.max(1));
        let changed = clamped != self.page;
        self.page = clamped;
        changed
    }
}
