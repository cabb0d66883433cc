use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EntityService;
use crate::models::{ApiResponse, Entity, ErrorCode};
use crate::storage::EntityStorage;

pub async fn get_record<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match EntityStorage::<T>::fetch_by_id(storage.as_ref(), &id).await {
        Ok(record) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            record,
            format!("{} retrieved successfully", T::KIND.title()),
        ))),
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(
                ErrorCode::EntityNotFound,
                format!("{} not found", T::KIND.title()),
            ),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get {}: {}", T::KIND.label(), e.message()),
            )),
        ),
    }
}
