//! Messages exchanged between the equipment tab, its sibling components and the browser

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::equipment::EquipmentId;

/// Signals other components send to the equipment tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "event")]
pub enum InboundSignal {
    #[serde(rename = "refreshEquipment")]
    RefreshEquipment,
    #[serde(rename = "newEquipmentAdded")]
    NewEquipmentAdded,
    #[serde(rename = "closeAddEquipment")]
    CloseAddEquipment,
}

/// Events the equipment tab emits for sibling components (edit and history modals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "event", content = "payload")]
pub enum ComponentEvent {
    #[serde(rename = "openEditEquipment")]
    OpenEditEquipment(EquipmentId),
    #[serde(rename = "openEquipmentHistory")]
    OpenEquipmentHistory(EquipmentId),
}

/// Hints for the browser-side widgets; they carry no server state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "event")]
pub enum BrowserEvent {
    #[serde(rename = "refresh-alpine")]
    RefreshAlpine,
    #[serde(rename = "scrollToTop")]
    ScrollToTop,
    #[serde(rename = "clear-employee-filter")]
    ClearEmployeeFilter,
    #[serde(rename = "clear-location-filter")]
    ClearLocationFilter,
}

/// Side effects produced while handling one interaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Effects {
    pub events: Vec<ComponentEvent>,
    pub browser: Vec<BrowserEvent>,
    /// Set when the client must leave the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: ComponentEvent) {
        self.events.push(event);
    }

    /// Queue a browser hint; repeated hints are sent once
    pub fn dispatch(&mut self, event: BrowserEvent) {
        if !self.browser.contains(&event) {
            self.browser.push(event);
        }
    }

    pub fn redirect_to(&mut self, route: impl Into<String>) {
        self.redirect = Some(route.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(ComponentEvent::OpenEditEquipment(EquipmentId(42))).unwrap(),
            json!({"event": "openEditEquipment", "payload": 42})
        );
        assert_eq!(
            serde_json::to_value(BrowserEvent::ClearEmployeeFilter).unwrap(),
            json!({"event": "clear-employee-filter"})
        );
        let signal: InboundSignal =
            serde_json::from_value(json!({"event": "newEquipmentAdded"})).unwrap();
        assert_eq!(signal, InboundSignal::NewEquipmentAdded);
    }

    #[test]
    fn test_unknown_signal_is_rejected() {
        assert!(serde_json::from_value::<InboundSignal>(json!({"event": "dropTables"})).is_err());
    }

    #[test]
    fn test_dispatch_deduplicates() {
        let mut effects = Effects::none();
        effects.dispatch(BrowserEvent::RefreshAlpine);
        effects.dispatch(BrowserEvent::ScrollToTop);
        effects.dispatch(BrowserEvent::RefreshAlpine);
        effects.redirect_to("/dashboard");
        assert_eq!(
            effects.browser,
            vec![BrowserEvent::RefreshAlpine, BrowserEvent::ScrollToTop]
        );
        assert_eq!(effects.redirect.as_deref(), Some("/dashboard"));
    }
}
