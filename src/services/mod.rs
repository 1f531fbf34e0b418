//! Business logic services

pub mod equipment_tab;
pub mod equipment_types;
pub mod export;
pub mod redis;
pub mod tab_store;

use std::{sync::Arc, time::Duration};

use crate::{
    config::{PanelConfig, RedisConfig, StateBackend},
    error::AppResult,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub equipment_tab: equipment_tab::EquipmentTabService,
    pub equipment_types: equipment_types::EquipmentTypesService,
}

impl Services {
    /// Create all services with the given repository, connecting the configured state store
    pub async fn new(
        repository: Repository,
        panel_config: PanelConfig,
        redis_config: &RedisConfig,
    ) -> AppResult<Self> {
        let store: Arc<dyn tab_store::TabStateStore> = match panel_config.state_backend {
            StateBackend::Redis => Arc::new(
                redis::RedisService::new(&redis_config.url, panel_config.session_ttl_seconds).await?,
            ),
            StateBackend::Memory => Arc::new(tab_store::MemoryTabStore::new(Duration::from_secs(
                panel_config.session_ttl_seconds,
            ))),
        };
        Ok(Self::with_store(repository, panel_config, store))
    }

    pub fn with_store(
        repository: Repository,
        panel_config: PanelConfig,
        store: Arc<dyn tab_store::TabStateStore>,
    ) -> Self {
        Self {
            equipment_tab: equipment_tab::EquipmentTabService::new(repository.clone(), store, panel_config),
            equipment_types: equipment_types::EquipmentTypesService::new(repository.clone()),
            repository,
        }
    }
}
