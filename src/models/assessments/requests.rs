use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 测评查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(
        default,
        deserialize_with = "crate::models::common::pagination::deserialize_optional_string_to_i64"
    )]
    pub subject_id: Option<i64>,
    pub term: Option<String>,
}

// 创建测评请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct CreateAssessmentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub maximum_marks: i64,
    pub term: String,
    pub subject_id: i64,
    pub date: Option<chrono::NaiveDate>,
}

// 更新测评请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct UpdateAssessmentRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub maximum_marks: Option<i64>,
    pub term: Option<String>,
    pub subject_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
}

// 测评列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub subject_id: Option<i64>,
    pub term: Option<String>,
}
