use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssessmentService;
use crate::models::assessments::requests::{AssessmentListQuery, AssessmentQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assessments(
    service: &AssessmentService,
    request: &HttpRequest,
    query: AssessmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AssessmentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        subject_id: query.subject_id,
        term: query.term,
    };

    match storage.list_assessments_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Assessments retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list assessments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list assessments: {e}"),
                )),
            )
        }
    }
}
