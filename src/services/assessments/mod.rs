pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assessments::requests::{
    AssessmentQueryParams, CreateAssessmentRequest, UpdateAssessmentRequest,
};
use crate::storage::Storage;

pub struct AssessmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssessmentService {
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

    // 获取测评列表
    pub async fn list_assessments(
        &self,
        request: &HttpRequest,
        query: AssessmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assessments(self, request, query).await
    }

    // 创建测评
    pub async fn create_assessment(
        &self,
        req: &HttpRequest,
        assessment_data: CreateAssessmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assessment(self, req, assessment_data).await
    }

    // 更新测评信息
    pub async fn update_assessment(
        &self,
        req: &HttpRequest,
        assessment_id: i64,
        update_data: UpdateAssessmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assessment(self, req, assessment_id, update_data).await
    }

    // 根据测评 ID 删除测评
    pub async fn delete_assessment(
        &self,
        req: &HttpRequest,
        assessment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assessment(self, req, assessment_id).await
    }
}
