pub mod compute;

pub mod class_overview;
pub mod dashboard;
pub mod grade_distribution;
pub mod student_trend;
pub mod subject_summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct AnalyticsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnalyticsService {
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

    // 学生成绩走势
    pub async fn student_trend(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        student_trend::student_trend(self, request, student_id).await
    }

    // 班级各科目平均分
    pub async fn class_subject_summary(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        subject_summary::class_subject_summary(self, request, class_id).await
    }

    // 班级概览与前5名
    pub async fn class_overview(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        class_overview::class_overview(self, request, class_id).await
    }

    // 班级等级分布
    pub async fn class_grade_distribution(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        grade_distribution::class_grade_distribution(self, request, class_id).await
    }

    // 全局仪表盘摘要
    pub async fn dashboard_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::dashboard_summary(self, request).await
    }
}
