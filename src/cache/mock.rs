use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use super::{CacheError, CacheStore, MemoryStore};

#[derive(Debug, Clone, PartialEq)]
pub struct CacheWrite {
    pub key: String,
    pub value: String,
    pub ttl: Duration,
}

/// Wraps a [`MemoryStore`] and records every read key and write. Reads and
/// writes can be made to fail independently.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
    reads: Mutex<Vec<String>>,
    writes: Mutex<Vec<CacheWrite>>,
}

impl RecordingStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub async fn seed(&self, key: &str, value: &str) {
        let _ = self.inner.set(key, value, Duration::from_secs(60)).await;
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<CacheWrite> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl CacheStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.reads.lock().unwrap().push(key.to_string());
        if self.fail_reads {
            return Err(CacheError::Unavailable("connection refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.writes.lock().unwrap().push(CacheWrite {
            key: key.to_string(),
            value: value.to_string(),
            ttl,
        });
        if self.fail_writes {
            return Err(CacheError::Unavailable("connection refused".to_string()));
        }
        self.inner.set(key, value, ttl).await
    }
}
