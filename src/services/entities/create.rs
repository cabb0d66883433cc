use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EntityService;
use crate::form::{FormMode, FormSession, SubmitOutcome, submit};
use crate::models::{ApiResponse, Entity, ErrorCode};
use crate::storage::memory::MemoryStorage;

pub async fn create_record<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    values: T::Form,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let mut session = FormSession::<T::Form>::new(T::KIND, FormMode::Add, None);
    session.values = values;

    Ok(submit_once::<T>(&mut session, storage.as_ref(), ErrorCode::EntityCreationFailed).await)
}

/// 一次性提交表单并转换为响应，创建与更新共用
pub(super) async fn submit_once<T: Entity>(
    session: &mut FormSession<T::Form>,
    storage: &MemoryStorage,
    failure_code: ErrorCode,
) -> HttpResponse {
    let outcome = submit::<T, _>(session, storage).await;
    let message = session
        .notification
        .as_ref()
        .map(|n| n.description.clone())
        .unwrap_or_default();

    match outcome {
        Ok(SubmitOutcome::Saved(record)) => {
            let response = ApiResponse::success(record, message);
            if session.mode == FormMode::Add {
                HttpResponse::Created().json(response)
            } else {
                HttpResponse::Ok().json(response)
            }
        }
        Ok(SubmitOutcome::Invalid(errors)) => HttpResponse::UnprocessableEntity().json(
            ApiResponse::error(ErrorCode::ValidationFailed, errors, "Validation failed"),
        ),
        Ok(SubmitOutcome::Failed(_)) => HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(failure_code, message)),
        Err(e) => HttpResponse::Conflict().json(ApiResponse::from_error(ErrorCode::FormNotEditable, &e)),
    }
}
