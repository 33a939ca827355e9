use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::MarkService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_mark(mark_id).await {
        Ok(true) => {
            info!("Mark {} deleted successfully", mark_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Mark deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MarkNotFound,
            "Mark not found",
        ))),
        Err(e) => {
            error!("Failed to delete mark {}: {}", mark_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete mark: {e}"),
                )),
            )
        }
    }
}
