pub mod make;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, error, web};
use std::sync::Arc;

use crate::config::ServiceSettings;
use crate::models::payments::requests::MakePaymentRequest;
use crate::storage::memory::MemoryStorage;

pub struct PaymentService;

impl PaymentService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<MemoryStorage>> {
        request
            .app_data::<web::Data<Arc<MemoryStorage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| error::ErrorInternalServerError("Storage not found in app data"))
    }

    pub(crate) fn get_settings(&self, request: &HttpRequest) -> ServiceSettings {
        request
            .app_data::<web::Data<ServiceSettings>>()
            .map(|data| data.get_ref().clone())
            .unwrap_or_default()
    }

    // 缴费弹窗信息
    pub async fn get_summary(
        &self,
        request: &HttpRequest,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        summary::get_summary(self, request, student_id).await
    }

    // 缴纳所选月份
    pub async fn make_payment(
        &self,
        request: &HttpRequest,
        student_id: String,
        body: MakePaymentRequest,
    ) -> ActixResult<HttpResponse> {
        make::make_payment(self, request, student_id, body).await
    }
}
