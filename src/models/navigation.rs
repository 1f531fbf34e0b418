//! Sidebar navigation of the administration panel

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SidebarTab {
    #[default]
    Equipment,
    EquipmentTypes,
    Users,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 3] = [SidebarTab::Equipment, SidebarTab::EquipmentTypes, SidebarTab::Users];

    pub fn icon(self) -> &'static str {
        match self {
            SidebarTab::Equipment => "archive-box",
            SidebarTab::EquipmentTypes => "wrench-screwdriver",
            SidebarTab::Users => "users",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SidebarTab::Equipment => "Items",
            SidebarTab::EquipmentTypes => "Equipment Type",
            SidebarTab::Users => "Users",
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SidebarItem {
    pub tab: SidebarTab,
    pub title: String,
    pub icon: String,
    pub active: bool,
}

/// Sidebar state: expanded or collapsed to icons, plus the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Sidebar {
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub active_tab: SidebarTab,
}

impl Sidebar {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Selecting a tab from the collapsed bar keeps it collapsed
    pub fn select(&mut self, tab: SidebarTab) {
        self.active_tab = tab;
    }

    pub fn items(&self) -> Vec<SidebarItem> {
        SidebarTab::ALL
            .into_iter()
            .map(|tab| SidebarItem {
                tab,
                title: tab.title().to_string(),
                icon: tab.icon().to_string(),
                active: tab == self.active_tab,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_sidebar_selection() {
        let mut sidebar = Sidebar::default();
        assert!(!sidebar.is_open);
        sidebar.select(SidebarTab::EquipmentTypes);
        assert!(!sidebar.is_open);

        let items = sidebar.items();
        assert_eq!(items.len(), 3);
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.tab).collect();
        assert_eq!(active, vec![SidebarTab::EquipmentTypes]);
        assert_eq!(items[0].icon, "archive-box");

        sidebar.open();
        assert!(sidebar.is_open);
        sidebar.close();
        assert!(!sidebar.is_open);
    }
}
