//! 对象缓存
//!
//! 表格与表单会话以 JSON 字符串形式存放，后端通过插件注册表按名称创建。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    // ttl 为 0 时使用后端的默认过期时间
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    /// 键不存在时写入并返回 true，已存在则不覆盖并返回 false
    async fn claim(&self, key: String, value: String) -> bool;
}

/// 读取并反序列化缓存对象，内容损坏时视为不存在
pub async fn get_json<T>(cache: &dyn ObjectCache, key: &str) -> CacheResult<T>
where
    T: DeserializeOwned,
{
    match cache.get_raw(key).await {
        CacheResult::Found(json) => match serde_json::from_str(&json) {
            Ok(value) => CacheResult::Found(value),
            Err(e) => {
                warn!("Discarding unreadable cache entry {}: {}", key, e);
                cache.remove(key).await;
                CacheResult::NotFound
            }
        },
        CacheResult::NotFound => CacheResult::NotFound,
    }
}

pub async fn insert_json<T>(
    cache: &dyn ObjectCache,
    key: String,
    value: &T,
) -> crate::errors::Result<()>
where
    T: Serialize + Sync,
{
    let json = serde_json::to_string(value)?;
    cache.insert_raw(key, json, 0).await;
    Ok(())
}

/// 注册缓存插件，在程序加载时执行
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            fn construct() -> $crate::cache::register::BoxedObjectCacheFuture {
                Box::pin(async {
                    <$ty>::new()
                        .map(|cache| Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        .map_err($crate::errors::MadrasaError::cache_connection)
                })
            }
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(construct),
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        page: usize,
    }

    #[tokio::test]
    async fn test_json_round_trip_and_corruption() {
        let cache = MokaCacheWrapper::with_settings(16, 60);
        insert_json(&cache, "k".to_string(), &Session { page: 2 })
            .await
            .unwrap();
        assert_eq!(
            get_json::<Session>(&cache, "k").await,
            CacheResult::Found(Session { page: 2 })
        );

        cache.insert_raw("bad".to_string(), "{".to_string(), 0).await;
        assert_eq!(get_json::<Session>(&cache, "bad").await, CacheResult::NotFound);
        assert_eq!(cache.get_raw("bad").await, CacheResult::NotFound);
    }
}
