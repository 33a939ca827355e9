use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AnalyticsService, compute};
use crate::models::analytics::responses::StudentTrendResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn student_trend(
    service: &AnalyticsService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生不存在按 404 处理，而不是返回空走势
    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to query student {}: {}", student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query student: {e}"),
                )),
            );
        }
    };

    // 批量加载该学生的成绩与相关测评，内存中关联
    let marks = match storage.list_marks_by_student(student_id).await {
        Ok(marks) => marks,
        Err(e) => {
            error!("Failed to query marks for student {}: {}", student_id, e);
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
    let trend = compute::student_trend_points(&marks, &index);

    let response = StudentTrendResponse {
        student_id: student.id,
        student_name: student.name,
        trend,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Student trend retrieved successfully",
    )))
}
