use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::ReportQueryParams;
use crate::services::ReportService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn student_report(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<ReportQueryParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .student_report(&req, student_id.0, query.into_inner().term)
        .await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/students/{student_id}").route(web::get().to(student_report)),
            ),
    );
}
