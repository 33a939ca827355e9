use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assessments::requests::{
    AssessmentQueryParams, CreateAssessmentRequest, UpdateAssessmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssessmentService;
use crate::utils::SafeAssessmentIdI64;

// 懒加载的全局 ASSESSMENT_SERVICE 实例
static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);

// HTTP处理程序
pub async fn list_assessments(
    req: HttpRequest,
    query: web::Query<AssessmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .list_assessments(&req, query.into_inner())
        .await
}

pub async fn create_assessment(
    req: HttpRequest,
    assessment_data: web::Json<CreateAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .create_assessment(&req, assessment_data.into_inner())
        .await
}

pub async fn update_assessment(
    req: HttpRequest,
    assessment_id: SafeAssessmentIdI64,
    update_data: web::Json<UpdateAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .update_assessment(&req, assessment_id.0, update_data.into_inner())
        .await
}

pub async fn delete_assessment(
    req: HttpRequest,
    assessment_id: SafeAssessmentIdI64,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .delete_assessment(&req, assessment_id.0)
        .await
}

// 配置路由
pub fn configure_assessments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assessments")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有登录用户可查询测评列表
                web::resource("")
                    .route(web::get().to(list_assessments))
                    .route(
                        web::post()
                            .to(create_assessment)
                            // 教师与管理员可以创建测评
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{assessment_id}")
                    .route(
                        web::put()
                            .to(update_assessment)
                            // 教师与管理员可以更新测评
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_assessment)
                            // 教师与管理员可以删除测评
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
