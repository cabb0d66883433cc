use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub cache: CacheConfig,
    pub mock: MockConfig,
    pub table: TablePageConfig,
    pub fees: FeesConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// 缓存配置（表格/表单会话）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub cache_type: String,
    pub default_ttl: u64,
    pub memory: MemoryConfig,
}

/// 内存缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub max_capacity: u64,
}

/// 模拟数据服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    pub seed: bool,           // 启动时是否写入示例数据
    pub latency_min_ms: u64,  // 模拟延迟下限（毫秒）
    pub latency_max_ms: u64,  // 模拟延迟上限（毫秒）
}

/// 表格配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePageConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

/// 费用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeesConfig {
    pub monthly_fee: f64, // 每月学费，用于缴费金额计算
}

/// 请求处理层运行参数（启动时由 AppConfig 派生，注入 app_data）
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub monthly_fee: f64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            monthly_fee: 50.0,
        }
    }
}
