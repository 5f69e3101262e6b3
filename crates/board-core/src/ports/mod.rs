//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod kv;
mod repository;

pub use kv::{KeyValueStore, KvError, Record};
pub use repository::{MAX_PAGE_LIMIT, PostRepository};
