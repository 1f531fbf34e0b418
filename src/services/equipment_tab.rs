//! Equipment tab service: mount, interact with and render one tab view

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{export, tab_store::TabStateStore};
use crate::{
    config::PanelConfig,
    error::AppResult,
    models::{
        equipment::{last_page, EquipmentPage, ListingQuery},
        equipment_tab::{EquipmentTab, FieldUpdate, TabAction},
        lookup::{DropdownOptions, Lookups},
        signals::{BrowserEvent, Effects, InboundSignal},
    },
    repository::Repository,
};

/// Everything the client needs to redraw the tab after an interaction
#[derive(Debug, Serialize, ToSchema)]
pub struct TabView {
    pub session_id: Uuid,
    pub state: EquipmentTab,
    pub listing: EquipmentPage,
    /// Value/label pairs for the person, unit and location dropdowns
    pub options: DropdownOptions,
    pub effects: Effects,
}

#[derive(Clone)]
pub struct EquipmentTabService {
    repository: Repository,
    store: Arc<dyn TabStateStore>,
    panel: PanelConfig,
}

impl EquipmentTabService {
    pub fn new(repository: Repository, store: Arc<dyn TabStateStore>, panel: PanelConfig) -> Self {
        Self {
            repository,
            store,
            panel,
        }
    }

    /// Load the dropdown lookups
    pub async fn lookups(&self) -> AppResult<Lookups> {
        Ok(Lookups {
            employees: self.repository.lookups.employees().await?,
            units: self.repository.lookups.units().await?,
            locations: self.repository.lookups.locations().await?,
        })
    }

    /// Start a new tab view with default state
    pub async fn mount(&self) -> AppResult<TabView> {
        let mut tab = EquipmentTab::new(self.panel.default_per_page);
        tab.lookups = self.lookups().await?;
        tab.total_equipments = self.repository.equipment.count().await?;

        let id = Uuid::new_v4();
        tracing::info!(session = %id, total = tab.total_equipments, "Mounted equipment tab");
        self.render_and_store(id, tab, Effects::none()).await
    }

    pub async fn render(&self, id: Uuid) -> AppResult<TabView> {
        let tab = self.store.load(id).await?;
        self.render_and_store(id, tab, Effects::none()).await
    }

    pub async fn update_field(&self, id: Uuid, update: FieldUpdate) -> AppResult<TabView> {
        let mut tab = self.store.load(id).await?;
        tracing::debug!(session = %id, ?update, "Field update");
        let effects = tab.update(update, &self.panel)?;
        self.render_and_store(id, tab, effects).await
    }

    pub async fn perform(&self, id: Uuid, action: TabAction) -> AppResult<TabView> {
        let mut tab = self.store.load(id).await?;
        tracing::debug!(session = %id, ?action, "Tab action");
        let effects = tab.perform(action, &self.panel)?;
        self.render_and_store(id, tab, effects).await
    }

    pub async fn receive(&self, id: Uuid, signal: InboundSignal) -> AppResult<TabView> {
        let mut tab = self.store.load(id).await?;
        tracing::debug!(session = %id, ?signal, "Inbound signal");
        let effects = tab.receive(signal, &self.panel);
        self.render_and_store(id, tab, effects).await
    }

    pub async fn unmount(&self, id: Uuid) -> AppResult<()> {
        self.store.remove(id).await
    }

    /// Spreadsheet of every row matching the view's current filters, search and order
    pub async fn export(&self, id: Uuid) -> AppResult<Vec<u8>> {
        let tab = self.store.load(id).await?;
        self.export_listing(&tab.listing_query()).await
    }

    pub async fn export_listing(&self, query: &ListingQuery) -> AppResult<Vec<u8>> {
        let rows = self.repository.equipment.listing_all(query).await?;
        tracing::info!(rows = rows.len(), "Exporting equipment listing");
        export::equipment_workbook(&rows)
    }

    async fn render_and_store(
        &self,
        id: Uuid,
        mut tab: EquipmentTab,
        mut effects: Effects,
    ) -> AppResult<TabView> {
        let query = tab.listing_query();
        let total = self.repository.equipment.listing_count(&query).await?;
        if tab.clamp_page(last_page(total, tab.per_page)) {
            tracing::debug!(session = %id, page = tab.page, "Page clamped to listing");
        }
        let rows = self
            .repository
            .equipment
            .listing_page(&query, tab.per_page, tab.offset())
            .await?;

        self.store.save(id, &tab).await?;
        effects.dispatch(BrowserEvent::ScrollToTop);

        let listing = EquipmentPage::new(rows, total, tab.page, tab.per_page);
        Ok(TabView {
            session_id: id,
            options: tab.lookups.options(),
            state: tab,
            listing,
            effects,
        })
    }
}
