//! 数据模型定义
//!
//! 按领域划分的业务模型（与 entity 中的数据库实体分离），
//! 以及统一的 API 响应结构和业务错误码。

pub mod common;

pub mod analytics;
pub mod assessments;
pub mod auth;
pub mod classes;
pub mod marks;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 程序启动时间，用于健康检查接口
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码
//
// 前两位对应 HTTP 状态码语义，后两位区分具体业务场景。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 4000,
    ValidationError = 4001,
    InvalidReference = 4002,

    Unauthorized = 4010,
    AuthFailed = 4011,
    LoginNotAllowed = 4012,
    RegistrationDisabled = 4013,

    PermissionDenied = 4030,

    NotFound = 4040,
    UserNotFound = 4041,
    ClassNotFound = 4042,
    StudentNotFound = 4043,
    SubjectNotFound = 4044,
    AssessmentNotFound = 4045,
    MarkNotFound = 4046,

    AlreadyExists = 4090,

    InternalServerError = 5000,
}
