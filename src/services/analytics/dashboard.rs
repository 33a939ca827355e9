use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{AnalyticsService, compute};
use crate::models::analytics::responses::DashboardSummary;
use crate::models::{ApiResponse, ErrorCode};

const RECENT_ASSESSMENT_LIMIT: u64 = 5;

pub async fn dashboard_summary(
    service: &AnalyticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 全局计数
    let counts = tokio::try_join!(
        storage.count_students(),
        storage.count_classes(),
        storage.count_subjects(),
        storage.count_assessments(),
    );
    let (total_students, total_classes, total_subjects, total_assessments) = match counts {
        Ok(counts) => counts,
        Err(e) => {
            error!("Failed to count entities: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count entities: {e}"),
                )),
            );
        }
    };

    // 全体成绩的平均分与及格率
    let marks = match storage.list_all_marks().await {
        Ok(marks) => marks,
        Err(e) => {
            error!("Failed to query marks: {}", e);
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
    let (average_percentage, pass_rate) = compute::overall_mark_stats(&marks, &index);

    // 最近的5场测评（按日期降序，日期相同的不再细分先后）
    let recent_assessments = match storage
        .list_recent_dated_assessments(RECENT_ASSESSMENT_LIMIT)
        .await
    {
        Ok(recent) => recent.into_iter().map(|a| a.name).collect(),
        Err(e) => {
            error!("Failed to query recent assessments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to query recent assessments: {e}"),
                )),
            );
        }
    };

    let summary = DashboardSummary {
        total_students: total_students as i64,
        total_classes: total_classes as i64,
        total_subjects: total_subjects as i64,
        total_assessments: total_assessments as i64,
        average_percentage,
        pass_rate,
        recent_assessments,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        summary,
        "Dashboard summary retrieved successfully",
    )))
}
