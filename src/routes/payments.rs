use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::payments::requests::MakePaymentRequest;
use crate::services::PaymentService;

// 懒加载的全局 PaymentService 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn get_summary(req: HttpRequest, id: web::Path<String>) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_summary(&req, id.into_inner()).await
}

pub async fn make_payment(
    req: HttpRequest,
    id: web::Path<String>,
    body: web::Json<MakePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .make_payment(&req, id.into_inner(), body.into_inner())
        .await
}

// 挂载在学生作用域内
pub fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{id}/payments")
            .route(web::get().to(get_summary))
            .route(web::post().to(make_payment)),
    );
}
