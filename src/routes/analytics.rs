use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::AnalyticsService;
use crate::utils::{SafeClassIdI64, SafeStudentIdI64};

// 懒加载的全局 ANALYTICS_SERVICE 实例
static ANALYTICS_SERVICE: Lazy<AnalyticsService> = Lazy::new(AnalyticsService::new_lazy);

// HTTP处理程序
pub async fn student_trend(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.student_trend(&req, student_id.0).await
}

pub async fn class_subject_summary(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .class_subject_summary(&req, class_id.0)
        .await
}

pub async fn class_overview(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.class_overview(&req, class_id.0).await
}

pub async fn class_grade_distribution(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE
        .class_grade_distribution(&req, class_id.0)
        .await
}

pub async fn dashboard_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    ANALYTICS_SERVICE.dashboard_summary(&req).await
}

// 配置路由
pub fn configure_analytics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/analytics")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/students/{student_id}/trend")
                    .route(web::get().to(student_trend)),
            )
            .service(
                web::resource("/classes/{class_id}/subjects-summary")
                    .route(web::get().to(class_subject_summary)),
            )
            .service(
                web::resource("/classes/{class_id}/overview")
                    .route(web::get().to(class_overview)),
            )
            .service(
                web::resource("/classes/{class_id}/grade-distribution")
                    .route(web::get().to(class_grade_distribution)),
            )
            .service(web::resource("/dashboard").route(web::get().to(dashboard_summary))),
    );
}
