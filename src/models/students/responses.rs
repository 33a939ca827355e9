use super::entities::Student;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Student>,
}

// 学生成绩明细（档案接口使用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentMarkDetail {
    pub assessment: String,
    pub subject: String,
    pub term: String,
    pub maximum: i64,
    pub score: f64,
    pub percentage: f64,
}

// 学生档案响应，包含班级名称与全部成绩明细
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentProfileResponse {
    pub id: i64,
    pub name: String,
    pub roll_number: String,
    pub class_id: i64,
    pub class_name: Option<String>,
    pub marks: Vec<StudentMarkDetail>,
}
