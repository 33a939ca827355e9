use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AnalyticsService, compute};
use crate::models::analytics::responses::GradeDistributionResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn class_grade_distribution(
    service: &AnalyticsService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(e) = ensure_class_exists(service, request, class_id).await {
        return Ok(e);
    }

    let students = match storage.list_students_by_class(class_id).await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to query students for class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query students: {e}"),
                )),
            );
        }
    };

    let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    let marks = match storage.list_marks_by_student_ids(&student_ids).await {
        Ok(marks) => marks,
        Err(e) => {
            error!("Failed to query marks for class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query marks: {e}"),
                )),
            );
        }
    };

    let mut assessment_ids: Vec<i64> = marks.iter().map(|m| m.assessment_id).collect();
    assessment_ids.sort_unstable();
    assessment_ids.dedup();

    let assessments = match storage.list_assessments_by_ids(&assessment_ids).await {
        Ok(assessments) => assessments,
        Err(e) => {
            error!("Failed to query assessments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query assessments: {e}"),
                )),
            );
        }
    };

    let index = compute::assessment_index(&assessments);
    let averages = compute::student_averages(&students, &marks, &index);
    let (graded_students, distribution) = compute::grade_distribution(&averages);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GradeDistributionResponse {
            class_id,
            graded_students,
            distribution,
        },
        "Grade distribution retrieved successfully",
    )))
}

// 班级不存在时返回 404 响应
async fn ensure_class_exists(
    service: &AnalyticsService,
    request: &HttpRequest,
    class_id: i64,
) -> Result<(), HttpResponse> {
    let storage = service.get_storage(request);
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Failed to query class {}: {}", class_id, e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query class: {e}"),
                )),
            )
        }
    }
}
