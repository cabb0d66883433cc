//! 实体通用路由，每种实体挂载在 /api/v1/{segment} 下

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, Scope, web};
use serde_json::Value;
use uuid::Uuid;

use crate::models::Entity;
use crate::models::forms::requests::OpenFormRequest;
use crate::models::tables::requests::{
    ColumnVisibilityRequest, RemoveQuery, RowSelectionRequest, TableQuery,
};
use crate::services::EntityService;

// HTTP处理程序
pub async fn render_table<T: Entity>(
    req: HttpRequest,
    query: web::Query<TableQuery>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .render_table(&req, query.into_inner())
        .await
}

pub async fn set_column_visibility<T: Entity>(
    req: HttpRequest,
    path: web::Path<(Uuid, String)>,
    body: web::Json<ColumnVisibilityRequest>,
) -> ActixResult<HttpResponse> {
    let (session, column) = path.into_inner();
    EntityService::<T>::new()
        .set_column_visibility(&req, session, column, body.into_inner())
        .await
}

pub async fn select_rows<T: Entity>(
    req: HttpRequest,
    session: web::Path<Uuid>,
    body: web::Json<RowSelectionRequest>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .select_rows(&req, session.into_inner(), body.into_inner())
        .await
}

pub async fn get_record<T: Entity>(
    req: HttpRequest,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .get_record(&req, id.into_inner())
        .await
}

pub async fn create_record<T: Entity>(
    req: HttpRequest,
    values: web::Json<T::Form>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .create_record(&req, values.into_inner())
        .await
}

pub async fn update_record<T: Entity>(
    req: HttpRequest,
    id: web::Path<String>,
    values: web::Json<T::Form>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .update_record(&req, id.into_inner(), values.into_inner())
        .await
}

pub async fn remove_record<T: Entity>(
    req: HttpRequest,
    id: web::Path<String>,
    query: web::Query<RemoveQuery>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .remove_record(&req, id.into_inner(), query.into_inner())
        .await
}

pub async fn open_form<T: Entity>(
    req: HttpRequest,
    body: web::Json<OpenFormRequest>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .open_form(&req, body.into_inner())
        .await
}

pub async fn get_form<T: Entity>(
    req: HttpRequest,
    session: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .get_form(&req, session.into_inner())
        .await
}

pub async fn change_form<T: Entity>(
    req: HttpRequest,
    session: web::Path<Uuid>,
    patch: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .change_form(&req, session.into_inner(), patch.into_inner())
        .await
}

pub async fn submit_form<T: Entity>(
    req: HttpRequest,
    session: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    EntityService::<T>::new()
        .submit_form(&req, session.into_inner())
        .await
}

/// 构建实体的路由作用域，调用方可继续追加资源
pub fn entity_scope<T: Entity>() -> Scope {
    web::scope(&format!("/api/v1/{}", T::KIND.api_segment()))
        .service(
            web::resource("")
                .route(web::get().to(render_table::<T>))
                .route(web::post().to(create_record::<T>)),
        )
        .service(
            web::resource("/table/{session}/columns/{column}")
                .route(web::put().to(set_column_visibility::<T>)),
        )
        .service(web::resource("/table/{session}/selection").route(web::put().to(select_rows::<T>)))
        .service(web::resource("/forms").route(web::post().to(open_form::<T>)))
        .service(
            web::resource("/forms/{session}")
                .route(web::get().to(get_form::<T>))
                .route(web::patch().to(change_form::<T>)),
        )
        .service(web::resource("/forms/{session}/submit").route(web::post().to(submit_form::<T>)))
        .service(
            web::resource("/{id}")
                .route(web::get().to(get_record::<T>))
                .route(web::put().to(update_record::<T>))
                .route(web::delete().to(remove_record::<T>)),
        )
}

// 配置路由
pub fn configure_entity_routes<T: Entity>(cfg: &mut web::ServiceConfig) {
    cfg.service(entity_scope::<T>());
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;
    use std::sync::Arc;

    use crate::cache::ObjectCache;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::config::ServiceSettings;
    use crate::models::departments::entities::Department;
    use crate::models::due_fees::entities::DueFee;
    use crate::models::students::entities::Student;
    use crate::models::transactions::entities::Transaction;
    use crate::storage::EntityStorage;
    use crate::storage::memory::{Latency, MemoryStorage};

    fn storage() -> web::Data<Arc<MemoryStorage>> {
        web::Data::new(Arc::new(MemoryStorage::seeded(Latency::none())))
    }

    fn cache() -> web::Data<Arc<dyn ObjectCache>> {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(256, 60));
        web::Data::new(cache)
    }

    macro_rules! app {
        ($($entity:ty),+) => {
            test::init_service(
                App::new()
                    .app_data(storage())
                    .app_data(cache())
                    .app_data(web::Data::new(ServiceSettings::default()))
                    $(.configure(configure_entity_routes::<$entity>))+,
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_table_session_round_trip() {
        let app = app!(Department);

        let req = test::TestRequest::get()
            .uri("/api/v1/departments")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["table"]["rows"].as_array().unwrap().len(), 3);
        let session = body["data"]["session"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/departments?session={session}&search=HAD"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let rows = body["data"]["table"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["cells"][1], "Hadith");

        // 会话保留搜索词
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/departments?session={session}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["table"]["search"]["value"], "HAD");
    }

    #[actix_web::test]
    async fn test_unknown_table_session() {
        let app = app!(Department);
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/departments?session={}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_column_toggle() {
        let app = app!(Student);
        let req = test::TestRequest::get().uri("/api/v1/students").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let session = body["data"]["session"].as_str().unwrap().to_string();
        let has_phone = |body: &Value| {
            body["data"]["table"]["headers"]
                .as_array()
                .unwrap()
                .iter()
                .any(|h| h["id"] == "phone")
        };
        assert!(!has_phone(&body));

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/students/table/{session}/columns/phone"))
            .set_json(json!({ "visible": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(has_phone(&body));

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/students/table/{session}/columns/nope"))
            .set_json(json!({ "visible": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_select_all_rows_on_page() {
        let app = app!(Student);
        let req = test::TestRequest::get()
            .uri("/api/v1/students?size=5")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let session = body["data"]["session"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/students/table/{session}/selection"))
            .set_json(json!({ "all_on_page": true, "selected": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["table"]["selected_count"], 5);
        assert_eq!(body["data"]["table"]["all_page_rows_selected"], true);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/students/table/{session}/selection"))
            .set_json(json!({ "selected": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_validates_then_saves() {
        let app = app!(Department);

        let req = test::TestRequest::post()
            .uri("/api/v1/departments")
            .set_json(json!({ "name": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Department name is required");

        let req = test::TestRequest::post()
            .uri("/api/v1/departments")
            .set_json(json!({ "name": "Tajweed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Department created successfully");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/departments/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Tajweed");
    }

    #[actix_web::test]
    async fn test_update_missing_record() {
        let app = app!(Department);
        let req = test::TestRequest::put()
            .uri("/api/v1/departments/404")
            .set_json(json!({ "name": "Ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_remove_requires_confirmation() {
        let app = app!(Department);

        let req = test::TestRequest::delete()
            .uri("/api/v1/departments/1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PRECONDITION_REQUIRED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"]["prompt"],
            "Are you sure you want to remove this department?"
        );

        let req = test::TestRequest::delete()
            .uri("/api/v1/departments/1?confirm=false")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let req = test::TestRequest::get()
            .uri("/api/v1/departments/1")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri("/api/v1/departments/1?confirm=true")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        let req = test::TestRequest::get()
            .uri("/api/v1/departments/1")
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_transactions_cannot_be_removed() {
        let app = app!(Transaction);
        let req = test::TestRequest::delete()
            .uri("/api/v1/transactions/1?confirm=true")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn test_form_session_derives_total() {
        let app = app!(DueFee);

        let req = test::TestRequest::post()
            .uri("/api/v1/due-fees/forms")
            .set_json(json!({ "mode": "ADD" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let session = body["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(body["data"]["phase"], "READY");

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/due-fees/forms/{session}"))
            .set_json(json!({ "fee_amount": "100", "due_months": "3" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["values"]["total_due"], "300.00");

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/due-fees/forms/{session}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["values"]["total_due"], "300.00");
    }

    #[actix_web::test]
    async fn test_form_submit_and_terminal_state() {
        let app = app!(Department);

        let req = test::TestRequest::post()
            .uri("/api/v1/departments/forms")
            .set_json(json!({ "mode": "ADD" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let session = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/departments/forms/{session}/submit"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/departments/forms/{session}"))
            .set_json(json!({ "name": "Seerah" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/departments/forms/{session}/submit"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["phase"], "NAVIGATED_AWAY");
        assert_eq!(body["data"]["redirect"], "/departments");

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/departments/forms/{session}/submit"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_concurrent_submits_create_one_record() {
        let storage = Arc::new(MemoryStorage::seeded(Latency::new(30, 30)));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .app_data(cache())
                .app_data(web::Data::new(ServiceSettings::default()))
                .configure(configure_entity_routes::<Department>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/departments/forms")
            .set_json(json!({ "mode": "ADD" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let session = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/departments/forms/{session}"))
            .set_json(json!({ "name": "Seerah" }))
            .to_request();
        test::call_service(&app, req).await;

        let uri = format!("/api/v1/departments/forms/{session}/submit");
        let (first, second) = tokio::join!(
            test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()),
            test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()),
        );
        let mut statuses = [first.status(), second.status()];
        statuses.sort();
        assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);

        let departments = EntityStorage::<Department>::list(storage.as_ref()).await.unwrap();
        assert_eq!(departments.len(), 4);

        // 锁已释放，会话处于终态
        let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let departments = EntityStorage::<Department>::list(storage.as_ref()).await.unwrap();
        assert_eq!(departments.len(), 4);
    }

    #[actix_web::test]
    async fn test_view_form_is_read_only() {
        let app = app!(Department);

        let req = test::TestRequest::post()
            .uri("/api/v1/departments/forms")
            .set_json(json!({ "mode": "VIEW", "id": "2" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["values"]["name"], "Hadith");
        let session = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/departments/forms/{session}"))
            .set_json(json!({ "name": "Changed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 4001);
    }

    #[actix_web::test]
    async fn test_edit_form_for_missing_record_is_degraded() {
        let app = app!(Department);
        let req = test::TestRequest::post()
            .uri("/api/v1/departments/forms")
            .set_json(json!({ "mode": "EDIT", "id": "missing" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Failed to load department");
        assert_eq!(body["data"]["phase"], "READY");
        assert_eq!(body["data"]["notification"]["level"], "error");
    }
}
