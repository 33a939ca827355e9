pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::marks::requests::{CreateMarkRequest, MarkQueryParams, UpdateMarkRequest};
use crate::storage::Storage;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取成绩列表
    pub async fn list_marks(
        &self,
        request: &HttpRequest,
        query: MarkQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_marks(self, request, query).await
    }

    // 录入成绩
    pub async fn create_mark(
        &self,
        req: &HttpRequest,
        mark_data: CreateMarkRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_mark(self, req, mark_data).await
    }

    // 更新成绩
    pub async fn update_mark(
        &self,
        req: &HttpRequest,
        mark_id: i64,
        update_data: UpdateMarkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_mark(self, req, mark_id, update_data).await
    }

    // 根据成绩 ID 删除成绩
    pub async fn delete_mark(&self, req: &HttpRequest, mark_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_mark(self, req, mark_id).await
    }
}
