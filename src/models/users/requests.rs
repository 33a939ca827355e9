use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

// 创建用户请求（存储层使用，password 字段为已哈希的密码）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
