use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::{CreateMarkRequest, MarkQueryParams, UpdateMarkRequest};
use crate::models::users::entities::UserRole;
use crate::services::MarkService;
use crate::utils::SafeMarkIdI64;

// 懒加载的全局 MARK_SERVICE 实例
static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

// HTTP处理程序
pub async fn list_marks(
    req: HttpRequest,
    query: web::Query<MarkQueryParams>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.list_marks(&req, query.into_inner()).await
}

pub async fn create_mark(
    req: HttpRequest,
    mark_data: web::Json<CreateMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.create_mark(&req, mark_data.into_inner()).await
}

pub async fn update_mark(
    req: HttpRequest,
    mark_id: SafeMarkIdI64,
    update_data: web::Json<UpdateMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE
        .update_mark(&req, mark_id.0, update_data.into_inner())
        .await
}

pub async fn delete_mark(req: HttpRequest, mark_id: SafeMarkIdI64) -> ActixResult<HttpResponse> {
    MARK_SERVICE.delete_mark(&req, mark_id.0).await
}

// 配置路由
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/marks")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有登录用户可查询成绩列表
                web::resource("").route(web::get().to(list_marks)).route(
                    web::post()
                        .to(create_mark)
                        // 教师与管理员可以录入成绩
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{mark_id}")
                    .route(
                        web::put()
                            .to(update_mark)
                            // 教师与管理员可以更新成绩
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_mark)
                            // 教师与管理员可以删除成绩
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
