//! 通用实体服务
//!
//! 每种实体使用同一套处理逻辑，按实体类型实例化。

pub mod create;
pub mod delete;
pub mod form;
pub mod get;
pub mod table;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, error, web};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::ObjectCache;
use crate::config::ServiceSettings;
use crate::models::Entity;
use crate::models::forms::requests::OpenFormRequest;
use crate::models::tables::requests::{
    ColumnVisibilityRequest, RemoveQuery, RowSelectionRequest, TableQuery,
};
use crate::storage::memory::MemoryStorage;

pub struct EntityService<T> {
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Default for EntityService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityService<T> {
    pub const fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<MemoryStorage>> {
        request
            .app_data::<web::Data<Arc<MemoryStorage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| error::ErrorInternalServerError("Storage not found in app data"))
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> ActixResult<Arc<dyn ObjectCache>> {
        request
            .app_data::<web::Data<Arc<dyn ObjectCache>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| error::ErrorInternalServerError("Cache not found in app data"))
    }

    pub(crate) fn get_settings(&self, request: &HttpRequest) -> ServiceSettings {
        request
            .app_data::<web::Data<ServiceSettings>>()
            .map(|data| data.get_ref().clone())
            .unwrap_or_default()
    }

    pub(crate) fn table_key(session: &Uuid) -> String {
        format!("table:{}:{}", T::KIND.tag(), session)
    }

    pub(crate) fn form_key(session: &Uuid) -> String {
        format!("form:{}:{}", T::KIND.tag(), session)
    }

    // 提交期间占用的锁键
    pub(crate) fn submit_lock_key(session: &Uuid) -> String {
        format!("form-submit:{}:{}", T::KIND.tag(), session)
    }

    // 渲染表格
    pub async fn render_table(
        &self,
        request: &HttpRequest,
        query: TableQuery,
    ) -> ActixResult<HttpResponse> {
        table::render_table(self, request, query).await
    }

    // 切换列显示
    pub async fn set_column_visibility(
        &self,
        request: &HttpRequest,
        session: Uuid,
        column: String,
        body: ColumnVisibilityRequest,
    ) -> ActixResult<HttpResponse> {
        table::set_column_visibility(self, request, session, column, body).await
    }

    // 选择行
    pub async fn select_rows(
        &self,
        request: &HttpRequest,
        session: Uuid,
        body: RowSelectionRequest,
    ) -> ActixResult<HttpResponse> {
        table::select_rows(self, request, session, body).await
    }

    pub async fn get_record(&self, request: &HttpRequest, id: String) -> ActixResult<HttpResponse> {
        get::get_record(self, request, id).await
    }

    pub async fn create_record(
        &self,
        request: &HttpRequest,
        values: T::Form,
    ) -> ActixResult<HttpResponse> {
        create::create_record(self, request, values).await
    }

    pub async fn update_record(
        &self,
        request: &HttpRequest,
        id: String,
        values: T::Form,
    ) -> ActixResult<HttpResponse> {
        update::update_record(self, request, id, values).await
    }

    // 删除记录（需确认）
    pub async fn remove_record(
        &self,
        request: &HttpRequest,
        id: String,
        query: RemoveQuery,
    ) -> ActixResult<HttpResponse> {
        delete::remove_record(self, request, id, query).await
    }

    // 表单会话
    pub async fn open_form(
        &self,
        request: &HttpRequest,
        body: OpenFormRequest,
    ) -> ActixResult<HttpResponse> {
        form::open_form(self, request, body).await
    }

    pub async fn get_form(&self, request: &HttpRequest, session: Uuid) -> ActixResult<HttpResponse> {
        form::get_form(self, request, session).await
    }

    pub async fn change_form(
        &self,
        request: &HttpRequest,
        session: Uuid,
        patch: Value,
    ) -> ActixResult<HttpResponse> {
        form::change_form(self, request, session, patch).await
    }

    pub async fn submit_form(
        &self,
        request: &HttpRequest,
        session: Uuid,
    ) -> ActixResult<HttpResponse> {
        form::submit_form(self, request, session).await
    }
}
