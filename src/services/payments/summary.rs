use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::models::payments::responses::PaymentSummary;
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::EntityStorage;

pub async fn get_summary(
    service: &PaymentService,
    request: &HttpRequest,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let settings = service.get_settings(request);

    match EntityStorage::<Student>::fetch_by_id(storage.as_ref(), &student_id).await {
        Ok(student) => {
            let summary = PaymentSummary {
                student_id: student.id.clone(),
                student_name: student.full_name(),
                completed: student.fees_due.is_empty(),
                fees_due: student.fees_due,
                monthly_fee: settings.monthly_fee,
            };
            let message = if summary.completed {
                "All payments completed"
            } else {
                "Payment summary retrieved successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(summary, message)))
        }
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::EntityNotFound, "Student not found"),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student: {}", e.message()),
            )),
        ),
    }
}
