//! Redis service holding equipment tab state between interactions

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use uuid::Uuid;

use super::tab_store::{session_not_found, TabStateStore};
use crate::{
    error::{AppError, AppResult},
    models::equipment_tab::EquipmentTab,
};

fn tab_key(id: Uuid) -> String {
    format!("equipment_tab:{}", id)
}

#[derive(Clone)]
pub struct RedisService {
    client: Client,
    ttl_seconds: u64,
}

impl RedisService {
    /// Create a new Redis service
    pub async fn new(url: &str, ttl_seconds: u64) -> AppResult<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::Internal(format!("Failed to create Redis client: {}", e)))?;

        // Test connection
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to connect to Redis: {}", e)))?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| AppError::Internal(format!("Redis connection test failed: {}", e)))?;

        Ok(Self { client, ttl_seconds })
    }

    async fn get_connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl TabStateStore for RedisService {
    async fn load(&self, id: Uuid) -> AppResult<EquipmentTab> {
        let mut conn = self.get_connection().await?;

        let stored: Option<String> = conn
            .get(tab_key(id))
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read tab state from Redis: {}", e)))?;

        let json = stored.ok_or_else(|| session_not_found(id))?;
        serde_json::from_str(&json)
            .map_err(|e| AppError::Internal(format!("Corrupt tab state for {}: {}", id, e)))
    }

    async fn save(&self, id: Uuid, tab: &EquipmentTab) -> AppResult<()> {
        let mut conn = self.get_connection().await?;

        let json = serde_json::to_string(tab)
            .map_err(|e| AppError::Internal(format!("Failed to encode tab state: {}", e)))?;
        conn.set_ex::<_, _, ()>(tab_key(id), json, self.ttl_seconds)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store tab state in Redis: {}", e)))?;

        Ok(())
    }

    async fn remove(&self, id: Uuid) -> AppResult<()> {
        let mut conn = self.get_connection().await?;

        conn.del::<_, ()>(tab_key(id))
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete tab state from Redis: {}", e)))?;

        Ok(())
    }
}
