use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssessmentService;
use crate::models::assessments::requests::UpdateAssessmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_assessment(
    service: &AssessmentService,
    request: &HttpRequest,
    assessment_id: i64,
    update_data: UpdateAssessmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(maximum_marks) = update_data.maximum_marks
        && maximum_marks < 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Maximum marks must not be negative",
        )));
    }

    match storage.update_assessment(assessment_id, update_data).await {
        Ok(Some(assessment)) => {
            info!("Assessment {} updated successfully", assessment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                assessment,
                "Assessment updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssessmentNotFound,
            "Assessment not found",
        ))),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("FOREIGN KEY constraint failed") {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidReference,
                    "Subject does not exist",
                )));
            }
            error!("Failed to update assessment {}: {}", assessment_id, msg);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update assessment: {msg}"),
                )),
            )
        }
    }
}
