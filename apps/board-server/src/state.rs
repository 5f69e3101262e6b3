//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::PostService;
use board_core::ports::KeyValueStore;
use board_infra::{InMemoryKeyValueStore, KvPostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    /// Name of the storage backend in use, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Wire the post service on top of a key-value backend.
    pub fn with_store(kv: Arc<dyn KeyValueStore>, storage: &'static str) -> Self {
        let repo = Arc::new(KvPostStore::new(kv));
        Self {
            posts: PostService::new(repo),
            storage,
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryKeyValueStore::new()), "memory")
    }

    /// Build the application state with the configured backend.
    #[cfg(feature = "redis")]
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        use board_infra::RedisKeyValueStore;

        match RedisKeyValueStore::new(&config.redis).await {
            Ok(kv) => {
                tracing::info!("Application state initialized with Redis storage");
                Ok(Self::with_store(Arc::new(kv), "redis"))
            }
            Err(e) if config.redis.fallback_to_memory => {
                tracing::warn!(
                    error = %e,
                    "Redis unavailable. Falling back to in-memory storage (data is lost on restart)."
                );
                Ok(Self::in_memory())
            }
            Err(e) => Err(anyhow::anyhow!("failed to connect to Redis: {e}")),
        }
    }

    #[cfg(not(feature = "redis"))]
    pub async fn new(_config: &AppConfig) -> anyhow::Result<Self> {
        tracing::info!("Running without redis feature - using in-memory storage");
        Ok(Self::in_memory())
    }
}
