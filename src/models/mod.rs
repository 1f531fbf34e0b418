//! Data models for the equipment panel

pub mod client_view;
pub mod equipment;
pub mod equipment_tab;
pub mod equipment_type;
pub mod lookup;
pub mod navigation;
pub mod signals;

// Re-export commonly used types
pub use equipment::{
    Equipment, EquipmentColumn, EquipmentId, EquipmentPage, EquipmentRow, ExportQuery, ListingFilters,
    ListingQuery, SortDirection,
};
pub use equipment_tab::{EquipmentTab, FieldUpdate, TabAction};
pub use equipment_type::{CreateEquipmentType, EquipmentType};
pub use lookup::{EmployeeOption, LocationOption, Lookups, UnitOption};
pub use signals::{BrowserEvent, ComponentEvent, Effects, InboundSignal};
