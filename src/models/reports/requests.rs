use serde::Deserialize;
use ts_rs::TS;

// 报告查询参数，学期缺省为 "Term 1"
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportQueryParams {
    pub term: Option<String>,
}
