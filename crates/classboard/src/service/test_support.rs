//! Cache doubles shared by service and handler tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use classboard_core::cache::{ttl_seconds, Cache, CacheError, Result};

/// HashMap-backed cache that honours TTLs and records the last one used.
#[derive(Default)]
pub struct MapCache {
    entries: Mutex<HashMap<String, (Vec<u8>, Instant)>>,
    last_ttl: Mutex<Option<Duration>>,
}

impl MapCache {
    pub fn insert(&self, key: &str, value: &[u8]) {
        let expires_at = Instant::now() + Duration::from_secs(60);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_vec(), expires_at));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    pub fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock().unwrap()
    }

    fn live(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|(_, expires_at)| Instant::now() < *expires_at)
            .map(|(value, _)| value.clone())
    }
}

#[async_trait]
impl Cache for MapCache {
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.live(key).is_some())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.live(key))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds(ttl));
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_vec(), expires_at));
        *self.last_ttl.lock().unwrap() = Some(ttl);
        Ok(())
    }
}

/// Cache whose every operation fails as if the server were down.
pub struct FailingCache;

#[async_trait]
impl Cache for FailingCache {
    async fn exists(&self, _key: &str) -> Result<bool> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Duration) -> Result<()> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }
}
