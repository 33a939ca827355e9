use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::analytics::percentage;
use crate::models::students::responses::{StudentMarkDetail, StudentProfileResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_student_profile(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    // 成绩明细保持录入顺序
    let mark_details: Vec<StudentMarkDetail> = marks
        .iter()
        .filter_map(|mark| {
            assessment_index.get(&mark.assessment_id).map(|assessment| {
                StudentMarkDetail {
                    assessment: assessment.name.clone(),
                    subject: subject_index
                        .get(&assessment.subject_id)
                        .map(|s| s.name.clone())
                        .unwrap_or_default(),
                    term: assessment.term.clone(),
                    maximum: assessment.maximum_marks,
                    score: mark.score,
                    percentage: percentage(mark.score, assessment.maximum_marks as f64),
                }
            })
        })
        .collect();

    let profile = StudentProfileResponse {
        id: student.id,
        name: student.name,
        roll_number: student.roll_number,
        class_id: student.class_id,
        class_name,
        marks: mark_details,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        profile,
        "Student profile retrieved successfully",
    )))
}
