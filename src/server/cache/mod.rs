//! Cache-aside store with explicit invalidation.
//!
//! Services read through [`Cache::get_json`], repopulate with [`Cache::set_json`]
//! on a miss and call [`Cache::invalidate`] after writes. The facade never
//! returns an error: a backend failure is logged and treated as a miss, so a
//! cache outage degrades to plain database reads.

pub mod keys;
pub mod memory;
pub mod redis_cache;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::AppError;

pub use memory::MemoryCache;
pub use redis_cache::RedisCache;

/// Default lifetime of a cached entry, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 600;

/// Raw string key/value storage behind the cache facade.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), AppError>;

    async fn delete(&self, keys: &[String]) -> Result<(), AppError>;
}

/// Shared handle to the configured cache backend.
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn CacheBackend>,
}

impl Cache {
    pub fn new(backend: impl CacheBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Process-local cache, used when no Redis URL is configured and in tests.
    pub fn in_memory() -> Self {
        Self::new(MemoryCache::new())
    }

    /// Reads and deserializes a cached value.
    ///
    /// # Returns
    /// - `Some(T)` - Key present and holds valid JSON for `T`
    /// - `None` - Miss, backend failure, or undecodable payload
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Cache read failed for {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    /// Stores a value for [`DEFAULT_TTL_SECS`].
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        self.set_json_with_ttl(key, value, DEFAULT_TTL_SECS).await;
    }

    pub async fn set_json_with_ttl<T: Serialize>(&self, key: &str, value: &T, ttl_secs: u64) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize cache entry {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.set(key, raw, ttl_secs).await {
            tracing::warn!("Cache write failed for {}: {}", key, e);
        }
    }

    /// Removes every listed key.
    pub async fn invalidate(&self, keys: &[String]) {
        if keys.is_empty() {
            return;
        }

        if let Err(e) = self.backend.delete(keys).await {
            tracing::warn!("Cache invalidation failed for {:?}: {}", keys, e);
        }
    }
}
