use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 进程内会话缓存
pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    /// 按全局配置创建
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        if config.cache.memory.max_capacity == 0 {
            return Err("cache.memory.max_capacity must be greater than 0".to_string());
        }
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    pub fn with_settings(max_capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, ttl: {}s",
            max_capacity, ttl_secs
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // 过期时间在构建时统一设置
        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn claim(&self, key: String, value: String) -> bool {
        // entry 保证同一个键只有一个写入者
        self.inner.entry(key).or_insert(value).await.is_fresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(8, 60);
        cache
            .insert_raw("table:student:1".to_string(), "{}".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("table:student:1").await,
            CacheResult::Found("{}".to_string())
        );
        cache.remove("table:student:1").await;
        assert_eq!(cache.get_raw("table:student:1").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_claim_is_exclusive() {
        let cache = MokaCacheWrapper::with_settings(8, 60);
        let (first, second) = tokio::join!(
            cache.claim("lock:1".to_string(), "a".to_string()),
            cache.claim("lock:1".to_string(), "b".to_string()),
        );
        assert!(first ^ second);

        cache.remove("lock:1").await;
        assert!(cache.claim("lock:1".to_string(), "c".to_string()).await);
        assert_eq!(cache.get_raw("lock:1").await, CacheResult::Found("c".to_string()));
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = MokaCacheWrapper::with_settings(8, 1);
        cache.insert_raw("k".to_string(), "v".to_string(), 0).await;
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);
    }
}
