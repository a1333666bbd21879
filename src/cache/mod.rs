//! In-memory response cache
//!
//! This module provides a TTL cache that keeps raw response bodies keyed by
//! request URL. Expiry is enforced by a background sweep task rather than on
//! the read path, so a lookup may still see an entry that has outlived its TTL
//! until the next sweep runs.

mod store;

pub use store::Cache;
