use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::{
    ObjectCache,
    register::{get_object_cache_plugin, registered_object_cache_plugins},
};
use crate::config::AppConfig;
use crate::errors::{MadrasaError, Result};
use crate::storage::memory::MemoryStorage;

const FALLBACK_CACHE: &str = "moka";

pub struct StartupContext {
    pub storage: Arc<MemoryStorage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn construct_cache(name: &str) -> Option<Result<Arc<dyn ObjectCache>>> {
    let constructor = get_object_cache_plugin(name)?;
    Some(constructor().await.map(Arc::from))
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = &AppConfig::get().cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    match construct_cache(cache_type).await {
        Some(Ok(cache)) => {
            warn!("Successfully created {} cache backend", cache_type);
            return Ok(cache);
        }
        Some(Err(e)) => warn!("Failed to create {} cache: {}", cache_type, e),
        None => warn!("Cache backend '{}' not found in registry", cache_type),
    }

    if cache_type != FALLBACK_CACHE {
        warn!("Falling back to default memory cache");
        match construct_cache(FALLBACK_CACHE).await {
            Some(Ok(cache)) => {
                warn!("Successfully created fallback Moka (in-memory) cache backend");
                return Ok(cache);
            }
            Some(Err(e)) => warn!("Failed to create fallback Moka cache: {}", e),
            None => warn!("Fallback cache backend is not registered"),
        }
    }

    Err(MadrasaError::cache_plugin_not_found(format!(
        "No cache backend available (tried: {cache_type})"
    )))
}

pub async fn prepare_server_startup() -> Result<StartupContext> {
    if cfg!(debug_assertions) {
        debug!(
            "Registered cache backends: {:?}",
            registered_object_cache_plugins()
        );
    }

    let storage = Arc::new(MemoryStorage::from_config(&AppConfig::get().mock));
    warn!("Mock storage backend initialized");

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
