use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ApiResponse;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn get_status(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_status(&request).await
}

pub async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("OK")))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .route("/health", web::get().to(health))
            .route("/status", web::get().to(get_status)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(configure_system_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/system/health")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["message"], "OK");
    }
}
