use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::system::responses::SystemStatusResponse;
use crate::models::{ApiResponse, AppStartTime};

/// 获取服务运行状态（只读）
pub async fn get_status(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);

    let response = SystemStatusResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        started_at,
        uptime_seconds: chrono::Utc::now()
            .signed_duration_since(started_at)
            .num_seconds(),
        cache_backend: config.cache.cache_type.clone(),
        latency_min_ms: config.mock.latency_min_ms,
        latency_max_ms: config.mock.latency_max_ms,
        monthly_fee: config.fees.monthly_fee,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "System status retrieved successfully",
    )))
}
