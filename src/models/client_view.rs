//! Browser-side view state of the filter widgets
//!
//! The employee and location pickers keep their own typed query and highlighted
//! choice. That state never round-trips to the server; it only changes when
//! the client applies a [`BrowserEvent`] received after an interaction.

use serde::{Deserialize, Serialize};

use super::signals::BrowserEvent;

/// One searchable picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerState {
    pub query: String,
    pub selected: Option<i32>,
    pub open: bool,
}

impl PickerState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn select(&mut self, value: i32, label: impl Into<String>) {
        self.selected = Some(value);
        self.query = label.into();
        self.open = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterWidgets {
    pub employee: PickerState,
    pub location: PickerState,
    /// Bumped on `refresh-alpine` so bound widgets re-read their values
    pub generation: u64,
    pub scroll_to_top: bool,
}

impl FilterWidgets {
    pub fn apply(&mut self, event: BrowserEvent) {
        match event {
            BrowserEvent::ClearEmployeeFilter => self.employee.clear(),
            BrowserEvent::ClearLocationFilter => self.location.clear(),
            BrowserEvent::RefreshAlpine => self.generation += 1,
            BrowserEvent::ScrollToTop => self.scroll_to_top = true,
        }
    }

    pub fn apply_all(&mut self, events: &[BrowserEvent]) {
        for event in events {
            self.apply(*event);
        }
    }
}
