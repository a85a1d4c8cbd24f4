//! Class and class notice service.
//!
//! Reads go through the cache first (cache-aside); writes go straight to the
//! repository and leave cached entries to expire on their own.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use classboard_core::cache::{
    class_key, class_list_key, class_notice_list_key, deserialize, serialize, Cache,
};
use classboard_core::classroom::{
    Class, ClassList, ClassNotice, ClassNoticeList, ClassNoticeUpdate, DomainError, NewClass,
    NewClassNotice, Result,
};
use classboard_core::storage::{ClassRepository, PageRequest};

/// Cache-aside service over a [`ClassRepository`].
pub struct ClassService {
    repository: Arc<dyn ClassRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl ClassService {
    /// Creates a new class service.
    ///
    /// # Arguments
    ///
    /// * `repository` - The durable store
    /// * `cache` - The cache consulted before the store on reads
    /// * `ttl` - Time-to-live for populated cache entries
    pub fn new(repository: Arc<dyn ClassRepository>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    pub async fn create_class(&self, new_class: NewClass) -> Result<Class> {
        self.repository
            .create_class(
                &new_class.class_id,
                &new_class.class_name,
                &new_class.teacher_id,
            )
            .await
            .map_err(|err| {
                tracing::error!(class_id = %new_class.class_id, error = %err, "Failed to create class");
                DomainError::ClassCreationFailed
            })
    }

    /// Gets a page of classes.
    ///
    /// The cache entry is shared by every page: a cached list is returned
    /// regardless of the requested `page` until it expires.
    pub async fn read_class_list(&self, page: PageRequest) -> Result<ClassList> {
        let cache_key = class_list_key();

        if let Some(list) = self.lookup::<ClassList>(&cache_key).await {
            tracing::trace!(count = list.data.len(), "Cache hit for class list");
            return Ok(list);
        }

        tracing::trace!(page = page.page(), limit = page.limit(), "Cache miss for class list");
        let list = self.repository.read_class_list(page).await.map_err(|err| {
            tracing::error!(error = %err, "Failed to read class list");
            DomainError::StorageUnavailable
        })?;

        self.populate(&cache_key, &list).await;
        Ok(list)
    }

    pub async fn read_class(&self, class_id: &str) -> Result<Class> {
        let cache_key = class_key(class_id);

        if let Some(class) = self.lookup::<Class>(&cache_key).await {
            tracing::trace!(%class_id, "Cache hit for class");
            return Ok(class);
        }

        tracing::trace!(%class_id, "Cache miss for class");
        let class = self
            .repository
            .read_class(class_id)
            .await
            .map_err(|err| {
                tracing::error!(%class_id, error = %err, "Failed to read class");
                DomainError::StorageUnavailable
            })?
            .ok_or(DomainError::ClassNotFound)?;

        self.populate(&cache_key, &class).await;
        Ok(class)
    }

    pub async fn create_class_notice(&self, notice: NewClassNotice) -> Result<ClassNotice> {
        self.repository
            .create_class_notice(&notice.class_id, &notice.message)
            .await
            .map_err(|err| {
                tracing::error!(class_id = %notice.class_id, error = %err, "Failed to create class notice");
                DomainError::ClassNoticeCreationFailed
            })
    }

    /// Gets a page of notices for a class, most recent first.
    ///
    /// An empty result is reported as [`DomainError::ClassNoticeNotFound`]
    /// and is never cached.
    pub async fn read_class_notice_list(
        &self,
        class_id: &str,
        page: PageRequest,
    ) -> Result<ClassNoticeList> {
        let cache_key = class_notice_list_key(class_id);

        if let Some(list) = self.lookup::<ClassNoticeList>(&cache_key).await {
            if !list.is_empty() {
                tracing::trace!(%class_id, count = list.data.len(), "Cache hit for class notices");
                return Ok(list);
            }
        }

        tracing::trace!(%class_id, page = page.page(), "Cache miss for class notices");
        let list = self
            .repository
            .read_class_notice_list(class_id, page)
            .await
            .map_err(|err| {
                tracing::error!(%class_id, error = %err, "Failed to read class notices");
                DomainError::StorageUnavailable
            })?;

        if list.is_empty() {
            return Err(DomainError::ClassNoticeNotFound);
        }

        self.populate(&cache_key, &list).await;
        Ok(list)
    }

    pub async fn update_class_notice(&self, update: ClassNoticeUpdate) -> Result<ClassNotice> {
        let notice = self
            .repository
            .update_class_notice(&update.class_id, update.notice_id, &update.message)
            .await
            .map_err(|err| {
                tracing::error!(
                    class_id = %update.class_id,
                    notice_id = update.notice_id,
                    error = %err,
                    "Failed to update class notice"
                );
                DomainError::ClassNoticeUpdateFailed
            })?
            .ok_or(DomainError::ClassNoticeNotFound)?;

        tracing::debug!(class_id = %notice.class_id, notice_id = notice.id, "Class notice updated");
        Ok(notice)
    }

    pub async fn delete_class_notice(&self, class_id: &str, notice_id: i64) -> Result<ClassNotice> {
        let notice = self
            .repository
            .delete_class_notice(class_id, notice_id)
            .await
            .map_err(|err| {
                tracing::error!(%class_id, notice_id, error = %err, "Failed to delete class notice");
                DomainError::ClassNoticeDeleteFailed
            })?
            .ok_or(DomainError::ClassNoticeNotFound)?;

        tracing::debug!(%class_id, notice_id, "Class notice deleted");
        Ok(notice)
    }

    /// Reads and decodes a cached value. Any cache or decode failure is a miss.
    async fn lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.exists(key).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache unavailable, reading from store");
                return None;
            }
        }

        let bytes = match self.cache.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache unavailable, reading from store");
                return None;
            }
        };

        match deserialize(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                // Deserialization failed - treat as cache miss
                tracing::warn!(key, error = %err, "Cached value could not be decoded");
                None
            }
        }
    }

    /// Stores a value under `key` for the configured TTL. Failures are logged only.
    async fn populate<T: Serialize>(&self, key: &str, value: &T) {
        let bytes = match serialize(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to encode value for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &bytes, self.ttl).await {
            tracing::warn!(key, error = %err, "Failed to populate cache");
        }
    }
}
