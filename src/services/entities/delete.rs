use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EntityService;
use crate::models::tables::requests::RemoveQuery;
use crate::models::tables::responses::RemovalPrompt;
use crate::models::{ApiResponse, Entity, ErrorCode};
use crate::storage::EntityStorage;
use crate::table::actions::removal_prompt;
use crate::table::{RemoveOutcome, confirm_and_remove};

pub async fn remove_record<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    id: String,
    query: RemoveQuery,
) -> ActixResult<HttpResponse> {
    let config = T::table();
    if !(config.actions.remove && config.removable) {
        return Ok(HttpResponse::MethodNotAllowed().json(ApiResponse::error_empty(
            ErrorCode::EntityRemoveFailed,
            format!("Removing a {} is not supported", T::KIND.label()),
        )));
    }

    // 未带确认参数时返回提示语，由前端弹窗确认
    let Some(confirmed) = query.confirm else {
        return Ok(HttpResponse::PreconditionRequired().json(ApiResponse::error(
            ErrorCode::RemovalConfirmationRequired,
            RemovalPrompt {
                prompt: removal_prompt(T::KIND),
                id,
            },
            "Removal must be confirmed",
        )));
    };

    let storage = service.get_storage(request)?;
    let outcome = confirm_and_remove(T::KIND, &id, confirmed, |id| async move {
        EntityStorage::<T>::remove(storage.as_ref(), &id).await
    })
    .await;

    match outcome {
        RemoveOutcome::Declined => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            format!("Removal of {} cancelled", T::KIND.label()),
        ))),
        RemoveOutcome::Removed => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            format!("{} removed successfully", T::KIND.title()),
        ))),
        RemoveOutcome::Missing => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EntityNotFound,
            format!("{} not found", T::KIND.title()),
        ))),
        RemoveOutcome::Failed(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EntityRemoveFailed,
                format!("Failed to remove {}: {e}", T::KIND.label()),
            )),
        ),
    }
}
