use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssessmentService;
use crate::models::assessments::requests::CreateAssessmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    assessment_data: CreateAssessmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if assessment_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Assessment name must not be empty",
        )));
    }

    // 满分为 0 的测评在统计中一律计为 0%，录入时直接拒绝负数
    if assessment_data.maximum_marks < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Maximum marks must not be negative",
        )));
    }

    match storage.create_assessment(assessment_data).await {
        Ok(assessment) => {
            info!("Assessment {} created successfully", assessment.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assessment,
                "Assessment created successfully",
            )))
        }
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("FOREIGN KEY constraint failed") {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidReference,
                    "Subject does not exist",
                )));
            }
            error!("Failed to create assessment: {}", msg);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create assessment: {msg}"),
                )),
            )
        }
    }
}
