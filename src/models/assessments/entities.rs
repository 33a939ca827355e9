use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Assessment {
    // 测评ID
    pub id: i64,
    // 测评名称
    pub name: String,
    // 测评类型（Exam/Quiz/Assignment/...）
    #[serde(rename = "type")]
    pub kind: String,
    // 满分
    pub maximum_marks: i64,
    // 学期标签
    pub term: String,
    // 所属科目
    pub subject_id: i64,
    // 测评日期（可选）
    pub date: Option<chrono::NaiveDate>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
