//! Application state.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The concrete cache backend is chosen by feature flag;
//! storage is always SQLite.

use std::{sync::Arc, time::Duration};

use classboard_core::cache::Cache;
use classboard_core::storage::{ClassRepository, UserRepository};

use crate::config::Config;
use crate::service::{ClassService, UserService};

/// Shared application state.
///
/// This is cloned for each request handler; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub class_service: Arc<ClassService>,
    pub user_service: Arc<UserService>,
    /// Key expected in the `x-api-key` header of user registration requests.
    api_key: Arc<str>,
    /// Upper bound on the time spent handling a single request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Wires the services around the given repository and cache.
    fn build<R>(repository: Arc<R>, cache: Arc<dyn Cache>, config: &Config) -> Self
    where
        R: ClassRepository + UserRepository + 'static,
    {
        let class_service = ClassService::new(repository.clone(), cache, config.cache_ttl());
        let user_service = UserService::new(repository);

        Self {
            class_service: Arc::new(class_service),
            user_service: Arc::new(user_service),
            api_key: Arc::from(config.api_key.as_str()),
            request_timeout: config.request_timeout(),
        }
    }

    /// Returns true if `candidate` is the configured API key.
    pub fn api_key_matches(&self, candidate: Option<&str>) -> bool {
        candidate.is_some_and(|key| key == &*self.api_key)
    }
}

// ============================================================================
// Feature-specific constructors
// ============================================================================

#[cfg(feature = "memory")]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!(
                sqlite_path = %config.sqlite_path,
                max_entries = config.cache_max_entries,
                "Using SQLite storage with in-memory cache"
            );

            Ok(Self::build(sqlite_repo, memory_cache, config))
        }
    }
}

#[cfg(feature = "redis")]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!(
                sqlite_path = %config.sqlite_path,
                redis_url = %config.redis_url,
                "Using SQLite storage with Redis cache"
            );

            Ok(Self::build(sqlite_repo, redis_cache, config))
        }
    }
}
