//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `redis` (default) - Redis key-value backend
//! - `minimal` - No external dependencies, in-memory only

pub mod kv;
pub mod store;

// Re-exports - In-Memory
pub use kv::InMemoryKeyValueStore;
pub use store::KvPostStore;

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use kv::{RedisConfig, RedisKeyValueStore};
