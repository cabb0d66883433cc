use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EntityService;
use super::create::submit_once;
use crate::form::{FormMode, FormPhase, FormSession};
use crate::models::{ApiResponse, Entity, ErrorCode};
use crate::storage::EntityStorage;

pub async fn update_record<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    id: String,
    values: T::Form,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 先确认记录存在，区分 404 与保存失败
    match EntityStorage::<T>::fetch_by_id(storage.as_ref(), &id).await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EntityNotFound,
                format!("{} not found", T::KIND.title()),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get {}: {}", T::KIND.label(), e.message()),
                )),
            );
        }
    }

    let mut session = FormSession::<T::Form>::new(T::KIND, FormMode::Edit, Some(id));
    session.phase = FormPhase::Ready;
    session.values = values;

    Ok(submit_once::<T>(&mut session, storage.as_ref(), ErrorCode::EntityUpdateFailed).await)
}
