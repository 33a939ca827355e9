use serde::Serialize;
use ts_rs::TS;

use crate::models::analytics::grading::Grade;

// 报告中的学生身份信息
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentIdentity {
    pub id: i64,
    pub name: String,
    pub roll_number: String,
}

// 报告中的一行成绩
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportRow {
    pub assessment: String,
    pub subject: Option<String>,
    pub score: f64,
    pub maximum: i64,
    pub percentage: f64,
    pub grade: Grade,
}

// 学生学期报告数据模型
//
// 该结构是与渲染端（前端页面 / PDF 排版器）之间的唯一契约，
// 本服务只负责组装数据，不做任何绘制。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentReportModel {
    pub student: StudentIdentity,
    pub class_name: Option<String>,
    pub term: String,
    pub rows: Vec<ReportRow>,
    pub overall_percentage: f64,
    pub overall_grade: Grade,
    pub comment: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
