use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssessmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    assessment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 测评下的成绩由外键级联删除
    match storage.delete_assessment(assessment_id).await {
        Ok(true) => {
            info!("Assessment {} deleted successfully", assessment_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Assessment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssessmentNotFound,
            "Assessment not found",
        ))),
        Err(e) => {
            error!("Failed to delete assessment {}: {}", assessment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete assessment: {e}"),
                )),
            )
        }
    }
}
