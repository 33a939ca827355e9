use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if subject_data.name.trim().is_empty() || subject_data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "Subject name and code must not be empty",
        )));
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!(
                "Subject {} ({}) created successfully",
                subject.name, subject.code
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("FOREIGN KEY constraint failed") {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidReference,
                    "Class does not exist",
                )));
            }
            error!("Failed to create subject: {}", msg);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create subject: {msg}"),
                )),
            )
        }
    }
}
