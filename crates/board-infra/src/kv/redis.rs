//! Redis key-value store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{
    AsyncCommands, Client, ConnectionAddr, ConnectionInfo, IntoConnectionInfo, RedisConnectionInfo,
    RedisResult,
};

use board_core::ports::{KeyValueStore, KvError, Record};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379/0). Takes precedence over the separate fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Sent to AUTH as-is, never embedded in a URL
    pub password: Option<String>,
    pub database: i64,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Whether to fall back to the in-memory store if Redis is unavailable
    pub fallback_to_memory: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: None,
            database: 0,
            connect_timeout: Duration::from_secs(5),
            fallback_to_memory: true,
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    ///
    /// `REDIS_URL` wins; otherwise `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`
    /// and `REDIS_DATABASE` are used.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            url: std::env::var("REDIS_URL").ok().filter(|s| !s.is_empty()),
            host: std::env::var("REDIS_HOST").unwrap_or(defaults.host),
            port: std::env::var("REDIS_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            password: std::env::var("REDIS_PASSWORD").ok().filter(|s| !s.is_empty()),
            database: std::env::var("REDIS_DATABASE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.database),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            fallback_to_memory: std::env::var("REDIS_FALLBACK_TO_MEMORY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.fallback_to_memory),
        }
    }

    /// Resolve where to connect. An empty password means no AUTH.
    pub fn connection_info(&self) -> RedisResult<ConnectionInfo> {
        if let Some(url) = &self.url {
            return url.as_str().into_connection_info();
        }

        Ok(ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.host.clone(), self.port),
            redis: RedisConnectionInfo {
                db: self.database,
                password: self.password.clone().filter(|p| !p.is_empty()),
                ..Default::default()
            },
        })
    }
}

/// Interpret a boolean environment value. Unrecognized values yield `None`.
fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if ["true", "1", "yes", "on"]
        .iter()
        .any(|t| value.eq_ignore_ascii_case(t))
    {
        Some(true)
    } else if ["false", "0", "no", "off"]
        .iter()
        .any(|f| value.eq_ignore_ascii_case(f))
    {
        Some(false)
    } else {
        None
    }
}

/// Redis-backed key-value store.
///
/// Records are Redis hashes and lists are Redis lists.
/// Uses connection manager for automatic reconnection.
pub struct RedisKeyValueStore {
    conn: ConnectionManager,
}

impl RedisKeyValueStore {
    pub async fn new(config: &RedisConfig) -> Result<Self, KvError> {
        let info = config
            .connection_info()
            .map_err(|e| KvError::Connection(e.to_string()))?;
        let client = Client::open(info).map_err(|e| KvError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| KvError::Connection("Connection timed out".to_string()))?
            .map_err(|e| KvError::Connection(e.to_string()))?;

        tracing::info!("Connected to Redis");

        Ok(Self { conn })
    }
}

fn op_err(e: redis::RedisError) -> KvError {
    KvError::Operation(e.to_string())
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn hash_set_all(&self, key: &str, fields: &[(String, String)]) -> Result<(), KvError> {
        let mut conn = self.conn.clone();
        conn.hset_multiple::<_, _, _, ()>(key, fields)
            .await
            .map_err(op_err)
    }

    async fn hash_get_all(&self, key: &str) -> Result<Record, KvError> {
        let mut conn = self.conn.clone();
        conn.hgetall(key).await.map_err(op_err)
    }

    async fn delete(&self, key: &str) -> Result<bool, KvError> {
        let mut conn = self.conn.clone();
        let removed: usize = conn.del(key).await.map_err(op_err)?;
        Ok(removed > 0)
    }

    async fn exists(&self, key: &str) -> Result<bool, KvError> {
        let mut conn = self.conn.clone();
        conn.exists(key).await.map_err(op_err)
    }

    async fn list_push_front(&self, key: &str, value: &str) -> Result<usize, KvError> {
        let mut conn = self.conn.clone();
        conn.lpush(key, value).await.map_err(op_err)
    }

    async fn list_range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<String>, KvError> {
        let mut conn = self.conn.clone();
        conn.lrange(key, start, stop).await.map_err(op_err)
    }

    async fn list_remove(&self, key: &str, value: &str) -> Result<usize, KvError> {
        let mut conn = self.conn.clone();
        // count 0 removes every occurrence
        conn.lrem(key, 0, value).await.map_err(op_err)
    }

    async fn list_len(&self, key: &str) -> Result<usize, KvError> {
        let mut conn = self.conn.clone();
        conn.llen(key).await.map_err(op_err)
    }
}
