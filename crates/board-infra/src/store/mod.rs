//! Post persistence.

mod post_store;

pub use post_store::KvPostStore;
