use async_trait::async_trait;
use moka::{future::Cache, Expiry};
use std::time::{Duration, Instant};

use super::{CacheError, CacheStore};

#[derive(Clone, Debug)]
struct Entry {
    value: String,
    ttl: Duration,
}

struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-process store with the same expiry semantics as the Redis one, used by
/// the handler and route tests.
#[derive(Clone)]
pub struct MemoryStore {
    entries: Cache<String, Entry>,
}

impl MemoryStore {
    pub fn new(max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryTtl)
            .build();

        Self { entries }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.entries
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    ttl,
                },
            )
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set() {
        let store = MemoryStore::default();

        assert_eq!(store.get("ph:a").await.unwrap(), None);

        store.set("ph:a", "{}", Duration::from_secs(60)).await.unwrap();
        assert_eq!(store.get("ph:a").await.unwrap().as_deref(), Some("{}"));

        store.set("ph:a", "[]", Duration::from_secs(60)).await.unwrap();
        assert_eq!(store.get("ph:a").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_entry_expires() {
        let store = MemoryStore::default();

        store.set("ph:short", "x", Duration::from_millis(50)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(store.get("ph:short").await.unwrap(), None);
    }
}
