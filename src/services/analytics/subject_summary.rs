use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AnalyticsService, compute};
use crate::models::{ApiResponse, ErrorCode};

pub async fn class_subject_summary(
    service: &AnalyticsService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级 -> 科目 -> 测评 -> 成绩，全部批量加载后在内存中关联
    let subjects = match storage.list_subjects_by_class(class_id).await {
        Ok(subjects) => subjects,
        Err(e) => {
            error!("Failed to query subjects for class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query subjects: {e}"),
                )),
            );
        }
    };

    let subject_ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();
    let assessments = match storage.list_assessments_by_subject_ids(&subject_ids).await {
        Ok(assessments) => assessments,
        Err(e) => {
            error!("Failed to query assessments for class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query assessments: {e}"),
                )),
            );
        }
    };

    let assessment_ids: Vec<i64> = assessments.iter().map(|a| a.id).collect();
    let marks = match storage.list_marks_by_assessment_ids(&assessment_ids).await {
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

    // 没有成绩的科目不进入结果；整个班级没有成绩时返回空列表而不是错误
    let summaries = compute::subject_summaries(&subjects, &assessments, &marks);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        summaries,
        "Subject summary retrieved successfully",
    )))
}
