use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};
use uuid::Uuid;

use super::EntityService;
use crate::cache::{CacheResult, ObjectCache, get_json, insert_json};
use crate::models::tables::requests::{ColumnVisibilityRequest, RowSelectionRequest, TableQuery};
use crate::models::tables::responses::TableResponse;
use crate::models::{ApiResponse, Entity, ErrorCode};
use crate::storage::EntityStorage;
use crate::storage::memory::MemoryStorage;
use crate::table::{DataTable, TableState};

pub async fn render_table<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    query: TableQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let cache = service.get_cache(request)?;
    let settings = service.get_settings(request);

    let (session, mut state) = match query.session {
        Some(session) => match load_state::<T>(cache.as_ref(), &session).await {
            Ok(state) => (session, state),
            Err(resp) => return Ok(resp),
        },
        None => (Uuid::new_v4(), TableState::new(settings.default_page_size)),
    };

    apply_query(&mut state, &query, settings.max_page_size);

    respond_with_table::<T>(storage.as_ref(), cache.as_ref(), session, state).await
}

pub async fn set_column_visibility<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    session: Uuid,
    column: String,
    body: ColumnVisibilityRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let cache = service.get_cache(request)?;

    let mut state = match load_state::<T>(cache.as_ref(), &session).await {
        Ok(state) => state,
        Err(resp) => return Ok(resp),
    };

    let table = DataTable::<T>::for_entity();
    match table.column(&column) {
        Some(def) if def.can_hide() => state.set_visibility(&column, body.visible),
        Some(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TableColumnNotHidable,
                format!("Column '{column}' cannot be hidden"),
            )));
        }
        None => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TableColumnNotFound,
                format!("Column '{column}' not found"),
            )));
        }
    }

    respond_with_table::<T>(storage.as_ref(), cache.as_ref(), session, state).await
}

pub async fn select_rows<T: Entity>(
    service: &EntityService<T>,
    request: &HttpRequest,
    session: Uuid,
    body: RowSelectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let cache = service.get_cache(request)?;

    let mut state = match load_state::<T>(cache.as_ref(), &session).await {
        Ok(state) => state,
        Err(resp) => return Ok(resp),
    };

    if body.all_on_page {
        let records = match EntityStorage::<T>::list(storage.as_ref()).await {
            Ok(records) => records,
            Err(e) => return Ok(list_failed::<T>(&e)),
        };
        let (page, _) = DataTable::<T>::for_entity().page_rows(&records, &state);
        state.set_page_rows_selected(page.iter().map(|r| r.id()), body.selected);
    } else if let Some(row_id) = body.row_id.as_deref() {
        state.set_row_selected(row_id, body.selected);
    } else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "row_id is required unless all_on_page is set",
        )));
    }

    respond_with_table::<T>(storage.as_ref(), cache.as_ref(), session, state).await
}

// 查询参数覆盖会话状态；搜索与筛选变化会回到第一页，之后再应用显式页码
fn apply_query(state: &mut TableState, query: &TableQuery, max_page_size: usize) {
    if let Some(search) = query.search.as_deref() {
        state.set_search(search);
    }
    if let Some(filters) = query.dialog_filters() {
        state.set_dialog_filters(filters);
    }
    match query.sort.as_deref() {
        Some("") => state.set_sorting(None, false),
        Some(column) => state.set_sorting(Some(column.to_string()), query.desc.unwrap_or(false)),
        None => {
            if let (Some(sorting), Some(desc)) = (state.sorting.as_mut(), query.desc) {
                sorting.desc = desc;
            }
        }
    }
    if let Some(size) = query.pagination.size {
        state.set_page_size(size, max_page_size);
    }
    if let Some(page) = query.pagination.page {
        state.set_page(page);
    }
}

async fn load_state<T: Entity>(
    cache: &dyn ObjectCache,
    session: &Uuid,
) -> Result<TableState, HttpResponse> {
    match get_json::<TableState>(cache, &EntityService::<T>::table_key(session)).await {
        CacheResult::Found(state) => Ok(state),
        CacheResult::NotFound => {
            debug!("{} table session {} not found", T::KIND, session);
            Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TableSessionNotFound,
                "Table session not found or expired",
            )))
        }
    }
}

fn list_failed<T: Entity>(e: &crate::errors::MadrasaError) -> HttpResponse {
    error!("Failed to list {} records: {}", T::KIND, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Failed to retrieve {} list: {}", T::KIND.label(), e.message()),
    ))
}

// 渲染当前状态并写回缓存
async fn respond_with_table<T: Entity>(
    storage: &MemoryStorage,
    cache: &dyn ObjectCache,
    session: Uuid,
    mut state: TableState,
) -> ActixResult<HttpResponse> {
    let records = match EntityStorage::<T>::list(storage).await {
        Ok(records) => records,
        Err(e) => return Ok(list_failed::<T>(&e)),
    };

    let table = DataTable::<T>::for_entity().render(&records, &state);
    // 页码越界时已落到最后一页
    state.page = table.pagination.page;

    if let Err(e) = insert_json(cache, EntityService::<T>::table_key(&session), &state).await {
        error!("Failed to store {} table session {}: {}", T::KIND, session, e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to store table session: {}", e.message()),
            )),
        );
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TableResponse { session, table },
        format!("{} list retrieved successfully", T::KIND.title()),
    )))
}
