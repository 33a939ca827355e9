use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MarkService;
use crate::models::marks::requests::{MarkListQuery, MarkQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_marks(
    service: &MarkService,
    request: &HttpRequest,
    query: MarkQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = MarkListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.student_id,
        assessment_id: query.assessment_id,
    };

    match storage.list_marks_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Marks retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list marks: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list marks: {e}"),
                )),
            )
        }
    }
}
