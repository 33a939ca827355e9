use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_logout(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(user_id) = RequireJWT::extract_user_id(request) {
        debug!("User {} logged out", user_id);
    }

    // 清空 refresh token cookie 即完成注销
    Ok(HttpResponse::Ok()
        .cookie(jwt::clear_refresh_token_cookie())
        .json(ApiResponse::success_empty("Logout successful")))
}
