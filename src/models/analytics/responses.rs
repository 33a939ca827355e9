use serde::Serialize;
use ts_rs::TS;

use super::grading::Grade;

// 学生成绩走势中的一个点
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TrendPoint {
    pub assessment: String,
    pub percentage: f64,
    pub term: String,
}

// 学生成绩走势响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct StudentTrendResponse {
    pub student_id: i64,
    pub student_name: String,
    pub trend: Vec<TrendPoint>,
}

// 班级单科平均分
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct SubjectSummary {
    pub subject: String,
    pub average: f64,
}

// 班级整体概览
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct ClassOverview {
    pub class_name: String,
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub pass_rate: f64,
}

// 班级前几名学生
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct TopStudent {
    pub student_name: String,
    pub average: f64,
}

// 班级概览响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct ClassOverviewResponse {
    pub overview: ClassOverview,
    pub top_students: Vec<TopStudent>,
}

// 等级分布中的一格
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct GradeBucket {
    pub grade: Grade,
    pub count: i64,
    pub percentage: f64,
}

// 班级等级分布响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct GradeDistributionResponse {
    pub class_id: i64,
    pub graded_students: i64,
    pub distribution: Vec<GradeBucket>,
}

// 全局仪表盘摘要
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub struct DashboardSummary {
    pub total_students: i64,
    pub total_classes: i64,
    pub total_subjects: i64,
    pub total_assessments: i64,
    pub average_percentage: f64,
    pub pass_rate: f64,
    pub recent_assessments: Vec<String>,
}
