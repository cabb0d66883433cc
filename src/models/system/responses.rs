use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemStatusResponse {
    pub system_name: String, // 系统名称
    pub version: String,
    pub environment: String, // 运行环境
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
    pub cache_backend: String,
    // 存储层模拟延迟（毫秒）
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    pub monthly_fee: f64,
}
