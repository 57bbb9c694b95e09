use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::server::{cache::CacheBackend, error::AppError};

/// Entry count at which a write sweeps out expired entries.
const DEFAULT_PRUNE_THRESHOLD: usize = 1024;

/// In-process cache with per-entry expiry.
///
/// Expired entries are dropped when read, and swept from the whole map on
/// write once it holds `prune_threshold` entries, so keys that are never read
/// again do not accumulate.
pub struct MemoryCache {
    entries: DashMap<String, (String, Instant)>,
    prune_threshold: usize,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_prune_threshold(DEFAULT_PRUNE_THRESHOLD)
    }

    pub fn with_prune_threshold(prune_threshold: usize) -> Self {
        Self {
            entries: DashMap::new(),
            prune_threshold,
        }
    }

    fn prune_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, (_, expires_at)| *expires_at > now);
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        // Clone out of the shard guard before any removal to avoid deadlock.
        let entry = self.entries.get(key).map(|entry| entry.value().clone());

        match entry {
            Some((value, expires_at)) if expires_at > Instant::now() => Ok(Some(value)),
            Some(_) => {
                self.entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), AppError> {
        if self.entries.len() >= self.prune_threshold {
            self.prune_expired();
        }

        let expires_at = Instant::now() + Duration::from_secs(ttl_secs);
        self.entries.insert(key.to_string(), (value, expires_at));
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<(), AppError> {
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }
}
