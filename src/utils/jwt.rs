//! JWT 工具
//!
//! 负责签发与校验 access/refresh 两类令牌，refresh token 通过
//! http-only cookie 下发。

use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";
const REFRESH_COOKIE_NAME: &str = "refresh_token";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub role: String,       // 用户角色
    pub token_type: String, // token类型: "access" 或 "refresh"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok()
    }
}

// Token 对
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

fn sign(
    user_id: i64,
    role: &str,
    token_type: &str,
    expiry: chrono::Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        token_type: token_type.to_string(),
        exp: (now + expiry).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let secret = &AppConfig::get().jwt.secret;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// 签发 Access Token
pub fn issue_access_token(user_id: i64, role: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let config = AppConfig::get();
    sign(
        user_id,
        role,
        TOKEN_TYPE_ACCESS,
        chrono::Duration::minutes(config.jwt.access_token_expiry),
    )
}

/// 签发 Refresh Token，expiry 为 None 时使用配置的默认时长
pub fn issue_refresh_token(
    user_id: i64,
    role: &str,
    expiry: Option<chrono::Duration>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let config = AppConfig::get();
    let expiry =
        expiry.unwrap_or_else(|| chrono::Duration::days(config.jwt.refresh_token_expiry));
    sign(user_id, role, TOKEN_TYPE_REFRESH, expiry)
}

/// 签发完整的 token 对（access + refresh）
pub fn issue_token_pair(
    user_id: i64,
    role: &str,
    refresh_expiry: Option<chrono::Duration>,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    Ok(TokenPair {
        access_token: issue_access_token(user_id, role)?,
        refresh_token: issue_refresh_token(user_id, role, refresh_expiry)?,
    })
}

/// 校验 JWT token 并返回 Claims
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = &AppConfig::get().jwt.secret;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

fn verify_token_type(
    token: &str,
    expected_type: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let claims = verify_token(token)?;
    if claims.token_type != expected_type {
        return Err(jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::InvalidToken,
        ));
    }
    Ok(claims)
}

/// 校验 Access Token
pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    verify_token_type(token, TOKEN_TYPE_ACCESS)
}

/// 校验 Refresh Token
pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    verify_token_type(token, TOKEN_TYPE_REFRESH)
}

/// 用 Refresh Token 换发新的 Access Token
pub fn refresh_access_token(refresh_token: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = verify_refresh_token(refresh_token)?;
    let user_id = claims
        .user_id()
        .ok_or(jsonwebtoken::errors::ErrorKind::InvalidToken)?;
    issue_access_token(user_id, &claims.role)
}

/// 创建 Refresh Token Cookie
pub fn refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
    let config = AppConfig::get();
    Cookie::build(REFRESH_COOKIE_NAME, refresh_token.to_string())
        .path("/")
        .max_age(actix_web::cookie::time::Duration::days(
            config.jwt.refresh_token_expiry,
        ))
        .same_site(SameSite::Strict)
        .http_only(true)
        .secure(config.is_production()) // 生产环境下使用 HTTPS
        .finish()
}

/// 创建空的 Refresh Token Cookie（用于注销）
pub fn clear_refresh_token_cookie() -> Cookie<'static> {
    let config = AppConfig::get();
    Cookie::build(REFRESH_COOKIE_NAME, "")
        .path("/")
        .max_age(actix_web::cookie::time::Duration::seconds(0))
        .same_site(SameSite::Strict)
        .http_only(true)
        .secure(config.is_production())
        .finish()
}

/// 从请求 cookie 中提取 Refresh Token
pub fn refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
    req.cookie(REFRESH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}
