use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::MarkService;
use crate::models::marks::requests::CreateMarkRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_data: CreateMarkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 录入前确认学生与测评都存在，引用错误按 400 处理
    let student = storage.get_student_by_id(mark_data.student_id).await;
    let assessment = storage.get_assessment_by_id(mark_data.assessment_id).await;

    match (student, assessment) {
        (Ok(Some(_)), Ok(Some(_))) => {}
        (Ok(None), _) | (_, Ok(None)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidReference,
                "Invalid student or assessment",
            )));
        }
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to validate mark references: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to validate mark references: {e}"),
                )),
            );
        }
    }

    // 得分允许超过满分，本层不做截断
    match storage.create_mark(mark_data).await {
        Ok(mark) => {
            info!(
                "Mark {} recorded for student {} on assessment {}",
                mark.id, mark.student_id, mark.assessment_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(mark, "Mark recorded successfully")))
        }
        Err(e) => {
            error!("Failed to record mark: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record mark: {e}"),
                )),
            )
        }
    }
}
