use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ReportService, assemble};
use crate::models::{ApiResponse, ErrorCode};

pub async fn student_report(
    service: &ReportService,
    request: &HttpRequest,
    student_id: i64,
    term: Option<String>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let term = term
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| assemble::DEFAULT_TERM.to_string());

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

    let class_name = match storage.get_class_by_id(student.class_id).await {
        Ok(class) => class.map(|c| c.name),
        Err(e) => {
            error!("Failed to query class {}: {}", student.class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query class: {e}"),
                )),
            );
        }
    };

    // 批量加载成绩、测评、科目，在内存中组装
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

    let mut subject_ids: Vec<i64> = assessments.iter().map(|a| a.subject_id).collect();
    subject_ids.sort_unstable();
    subject_ids.dedup();

    let subjects = match storage.list_subjects_by_ids(&subject_ids).await {
        Ok(subjects) => subjects,
        Err(e) => {
            error!("Failed to query subjects: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query subjects: {e}"),
                )),
            );
        }
    };

    let assessment_index: HashMap<i64, _> = assessments.iter().map(|a| (a.id, a)).collect();
    let subject_index: HashMap<i64, _> = subjects.iter().map(|s| (s.id, s)).collect();

    let report = assemble::assemble_report(
        &student,
        class_name,
        &term,
        &marks,
        &assessment_index,
        &subject_index,
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        report,
        "Student report assembled successfully",
    )))
}
