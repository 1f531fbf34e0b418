//! Storage for equipment tab state between interactions

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment_tab::EquipmentTab,
};

pub(crate) fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Equipment tab session {} not found or expired", id))
}

/// Keeps the state of each mounted equipment tab, keyed by view session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TabStateStore: Send + Sync {
    async fn load(&self, id: Uuid) -> AppResult<EquipmentTab>;

    /// Store the state and restart its expiry
    async fn save(&self, id: Uuid, tab: &EquipmentTab) -> AppResult<()>;

    async fn remove(&self, id: Uuid) -> AppResult<()>;
}

/// In-process store, for single-instance deployments and tests
#[derive(Clone)]
pub struct MemoryTabStore {
    tabs: Arc<RwLock<HashMap<Uuid, (Instant, EquipmentTab)>>>,
    ttl: Duration,
}

impl MemoryTabStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tabs: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.tabs.read().await.len()
    }
}

/// Drop expired sessions, returning how many went
fn purge_expired(tabs: &mut HashMap<Uuid, (Instant, EquipmentTab)>, now: Instant) -> usize {
    let before = tabs.len();
    tabs.retain(|_, (expires_at, _)| *expires_at > now);
    before - tabs.len()
}

#[async_trait]
impl TabStateStore for MemoryTabStore {
    async fn load(&self, id: Uuid) -> AppResult<EquipmentTab> {
        let tabs = self.tabs.read().await;
        match tabs.get(&id) {
            Some((expires_at, tab)) if *expires_at > Instant::now() => Ok(tab.clone()),
            _ => Err(session_not_found(id)),
        }
    }

    async fn save(&self, id: Uuid, tab: &EquipmentTab) -> AppResult<()> {
        let now = Instant::now();
        let mut tabs = self.tabs.write().await;
        let purged = purge_expired(&mut tabs, now);
        if purged > 0 {
            tracing::debug!(purged, live = tabs.len(), "Dropped expired equipment tab sessions");
        }
        tabs.insert(id, (now + self.ttl, tab.clone()));
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> AppResult<()> {
        self.tabs.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryTabStore::new(Duration::from_secs(60));
        let id = Uuid::new_v4();
        let mut tab = EquipmentTab::new(25);
        tab.search_string = "Dell".to_string();

        store.save(id, &tab).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), tab);
        assert_eq!(store.len().await, 1);

        store.remove(id).await.unwrap();
        assert!(matches!(store.load(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_expired_sessions_are_not_loaded() {
        let store = MemoryTabStore::new(Duration::ZERO);
        let id = Uuid::new_v4();
        store.save(id, &EquipmentTab::new(10)).await.unwrap();
        assert!(matches!(store.load(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_saving_drops_expired_sessions() {
        let store = MemoryTabStore::new(Duration::ZERO);
        for _ in 0..5 {
            store.save(Uuid::new_v4(), &EquipmentTab::new(10)).await.unwrap();
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_saving_keeps_live_sessions() {
        let store = MemoryTabStore::new(Duration::from_secs(60));
        let first = Uuid::new_v4();
        store.save(first, &EquipmentTab::new(10)).await.unwrap();
        store.save(Uuid::new_v4(), &EquipmentTab::new(25)).await.unwrap();
        assert_eq!(store.len().await, 2);
        assert!(store.load(first).await.is_ok());
    }
}
