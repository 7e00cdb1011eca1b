pub mod redis;

#[cfg(test)]
pub mod memory;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// String key-value store with per-entry expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` is a plain miss; `Err` means the store could not be read.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}
