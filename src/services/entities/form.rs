//! 表单会话接口：打开、读取、修改字段、提交

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::{debug, error};
use uuid::Uuid;

use super::EntityService;
use crate::cache::{CacheResult, ObjectCache, get_json, insert_json};
use crate::errors::MadrasaError;
use crate::form::{FormSession, SubmitOutcome, open, submit};
use crate::models::forms::requests::OpenFormRequest;
use crate::models::{ApiResponse, Entity, ErrorCode};
use crate::storage::memory::MemoryStorage;

type Session<T> = FormSession<<T as Entity>::Form>;

pub async fn open_form<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    body: OpenFormRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let cache = service.get_cache(request)?;

    let session = open::<T, _>(storage.as_ref(), body.mode, body.id).await;
    if let Err(resp) = store_session::<T>(cache.as_ref(), &session).await {
        return Ok(resp);
    }

    // 加载失败时仍返回可用的会话，提示信息放在 notification 中
    let message = match &session.notification {
        Some(notification) => notification.description.clone(),
        None => format!("{} form opened", T::KIND.title()),
    };
    Ok(HttpResponse::Created().json(ApiResponse::success(session, message)))
}

pub async fn get_form<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    session_id: Uuid,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request)?;

    match load_session::<T>(cache.as_ref(), &session_id).await {
        Ok(session) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            session,
            "Form session retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}

pub async fn change_form<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    session_id: Uuid,
    patch: Value,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request)?;

    let mut session = match load_session::<T>(cache.as_ref(), &session_id).await {
        Ok(session) => session,
        Err(resp) => return Ok(resp),
    };

    if let Err(e) = session.change(patch) {
        return Ok(rejected::<T>(&session, &e));
    }

    if let Err(resp) = store_session::<T>(cache.as_ref(), &session).await {
        return Ok(resp);
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(session, "Form updated")))
}

pub async fn submit_form<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    session_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let cache = service.get_cache(request)?;

    // 先占用会话再读取，同一会话的并发提交只有一个能进入
    let lock_key = EntityService::<T>::submit_lock_key(&session_id);
    if !cache.claim(lock_key.clone(), "SUBMITTING".to_string()).await {
        debug!("{} form session {} is already submitting", T::KIND, session_id);
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::FormNotEditable,
            "Form is busy (Submitting)",
        )));
    }

    let response = submit_claimed::<T>(cache.as_ref(), storage.as_ref(), &session_id).await;
    cache.remove(&lock_key).await;
    Ok(response)
}

async fn submit_claimed<T: Entity>(
    cache: &dyn ObjectCache,
    storage: &MemoryStorage,
    session_id: &Uuid,
) -> HttpResponse {
    let mut session = match load_session::<T>(cache, session_id).await {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let outcome = match submit::<T, _>(&mut session, storage).await {
        Ok(outcome) => outcome,
        Err(e) => return rejected::<T>(&session, &e),
    };

    if let Err(resp) = store_session::<T>(cache, &session).await {
        return resp;
    }

    let message = session
        .notification
        .as_ref()
        .map(|n| n.description.clone())
        .unwrap_or_default();

    match outcome {
        SubmitOutcome::Saved(_) => HttpResponse::Ok().json(ApiResponse::success(session, message)),
        SubmitOutcome::Invalid(_) => HttpResponse::UnprocessableEntity().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            session,
            "Validation failed",
        )),
        SubmitOutcome::Failed(_) => HttpResponse::InternalServerError().json(ApiResponse::error(
            ErrorCode::FormSubmitFailed,
            session,
            message,
        )),
    }
}

// 会话状态不允许的操作
fn rejected<T: Entity>(session: &Session<T>, e: &MadrasaError) -> HttpResponse {
    match e {
        MadrasaError::InvalidState(_) => {
            let code = if session.read_only {
                ErrorCode::FormReadOnly
            } else {
                ErrorCode::FormNotEditable
            };
            HttpResponse::Conflict().json(ApiResponse::from_error(code, e))
        }
        _ => HttpResponse::BadRequest().json(ApiResponse::from_error(ErrorCode::ValidationFailed, e)),
    }
}

async fn load_session<T: Entity>(
    cache: &dyn ObjectCache,
    session_id: &Uuid,
) -> Result<Session<T>, HttpResponse> {
    match get_json::<Session<T>>(cache, &EntityService::<T>::form_key(session_id)).await {
        CacheResult::Found(session) => Ok(session),
        CacheResult::NotFound => {
            debug!("{} form session {} not found", T::KIND, session_id);
            Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FormSessionNotFound,
                "Form session not found or expired",
            )))
        }
    }
}

async fn store_session<T: Entity>(
    cache: &dyn ObjectCache,
    session: &Session<T>,
) -> Result<(), HttpResponse> {
    insert_json(cache, EntityService::<T>::form_key(&session.id), session)
        .await
        .map_err(|e| {
            error!("Failed to store {} form session {}: {}", T::KIND, session.id, e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to store form session: {}", e.message()),
            ))
        })
}
