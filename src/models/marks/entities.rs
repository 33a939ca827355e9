use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct Mark {
    // 成绩ID
    pub id: i64,
    // 学生ID
    pub student_id: i64,
    // 测评ID
    pub assessment_id: i64,
    // 得分（允许超过满分，本层不做截断）
    pub score: f64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
