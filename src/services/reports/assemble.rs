//! 学生报告数据组装
//!
//! 把一个学生某学期的成绩整理成渲染端可直接排版的数据结构。
//! 与统计核心一样是纯计算，渲染（前端页面 / PDF 排版）不在本层。

use std::collections::HashMap;

use crate::models::analytics::grading::Grade;
use crate::models::analytics::{percentage, round2};
use crate::models::assessments::entities::Assessment;
use crate::models::marks::entities::Mark;
use crate::models::reports::responses::{ReportRow, StudentIdentity, StudentReportModel};
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;

/// 未指定学期时的默认值
pub const DEFAULT_TERM: &str = "Term 1";

/// 评语阶梯，随总评百分比单调递增
pub fn comment_for(overall: f64) -> &'static str {
    if overall >= 90.0 {
        "Outstanding mastery — keep challenging with advanced material"
    } else if overall >= 75.0 {
        "Great momentum — maintain consistency and stretch goals"
    } else if overall >= 60.0 {
        "Solid progress — focus on weak topics for next term"
    } else {
        "Building foundation — add more practice sessions"
    }
}

/// 组装学生学期报告
///
/// 1. 过滤出测评学期与请求学期完全一致的成绩
/// 2. 按 (测评日期, 测评名称) 升序排序，无日期的排最前
/// 3. 逐行计算百分比与等级，总评取各行百分比的平均值（无成绩为 0）
pub fn assemble_report(
    student: &Student,
    class_name: Option<String>,
    term: &str,
    marks: &[Mark],
    assessments: &HashMap<i64, &Assessment>,
    subjects: &HashMap<i64, &Subject>,
) -> StudentReportModel {
    let mut term_marks: Vec<(&Mark, &Assessment)> = marks
        .iter()
        .filter_map(|mark| {
            assessments
                .get(&mark.assessment_id)
                .map(|assessment| (mark, *assessment))
        })
        .filter(|(_, assessment)| assessment.term == term)
        .collect();

    term_marks.sort_by(|(_, a), (_, b)| {
        let date_a = a.date.unwrap_or(chrono::NaiveDate::MIN);
        let date_b = b.date.unwrap_or(chrono::NaiveDate::MIN);
        date_a.cmp(&date_b).then_with(|| a.name.cmp(&b.name))
    });

    let rows: Vec<ReportRow> = term_marks
        .iter()
        .map(|(mark, assessment)| {
            let pct = percentage(mark.score, assessment.maximum_marks as f64);
            ReportRow {
                assessment: assessment.name.clone(),
                subject: subjects
                    .get(&assessment.subject_id)
                    .map(|s| s.name.clone()),
                score: mark.score,
                maximum: assessment.maximum_marks,
                percentage: pct,
                grade: Grade::from_percentage(pct),
            }
        })
        .collect();

    let overall_percentage = if rows.is_empty() {
        0.0
    } else {
        round2(rows.iter().map(|r| r.percentage).sum::<f64>() / rows.len() as f64)
    };

    StudentReportModel {
        student: StudentIdentity {
            id: student.id,
            name: student.name.clone(),
            roll_number: student.roll_number.clone(),
        },
        class_name,
        term: term.to_string(),
        rows,
        overall_percentage,
        overall_grade: Grade::from_percentage(overall_percentage),
        comment: comment_for(overall_percentage).to_string(),
        generated_at: chrono::Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn student(id: i64, name: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            roll_number: format!("S{id}"),
            class_id: 1,
            extra_info: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn subject(id: i64, name: &str) -> Subject {
        Subject {
            id,
            name: name.to_string(),
            code: name.to_uppercase(),
            class_id: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn assessment(
        id: i64,
        name: &str,
        maximum: i64,
        term: &str,
        date: Option<NaiveDate>,
    ) -> Assessment {
        Assessment {
            id,
            name: name.to_string(),
            kind: "Exam".to_string(),
            maximum_marks: maximum,
            term: term.to_string(),
            subject_id: 1,
            date,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn mark(id: i64, assessment_id: i64, score: f64) -> Mark {
        Mark {
            id,
            student_id: 1,
            assessment_id,
            score,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn index<'a, T>(items: &'a [T], id: fn(&T) -> i64) -> HashMap<i64, &'a T> {
        items.iter().map(|item| (id(item), item)).collect()
    }

    #[test]
    fn test_undated_marks_sort_first() {
        let subjects = vec![subject(1, "Maths")];
        let assessments = vec![
            assessment(1, "Quiz", 100, "Term 1", None),
            assessment(
                2,
                "Midterm",
                100,
                "Term 1",
                Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            ),
        ];
        let marks = vec![mark(1, 2, 90.0), mark(2, 1, 80.0)];

        let report = assemble_report(
            &student(1, "Amara"),
            Some("10-A".to_string()),
            "Term 1",
            &marks,
            &index(&assessments, |a| a.id),
            &index(&subjects, |s| s.id),
        );

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].assessment, "Quiz");
        assert_eq!(report.rows[1].assessment, "Midterm");
        assert_eq!(report.overall_percentage, 85.0);
        assert_eq!(report.overall_grade, Grade::A);
    }

    #[test]
    fn test_undated_marks_tie_break_by_name() {
        let subjects = vec![subject(1, "Maths")];
        let assessments = vec![
            assessment(1, "Worksheet B", 10, "Term 1", None),
            assessment(2, "Worksheet A", 10, "Term 1", None),
        ];
        let marks = vec![mark(1, 1, 5.0), mark(2, 2, 5.0)];

        let report = assemble_report(
            &student(1, "Amara"),
            None,
            "Term 1",
            &marks,
            &index(&assessments, |a| a.id),
            &index(&subjects, |s| s.id),
        );

        assert_eq!(report.rows[0].assessment, "Worksheet A");
        assert_eq!(report.rows[1].assessment, "Worksheet B");
    }

    #[test]
    fn test_term_filter_is_exact() {
        let subjects = vec![subject(1, "Maths")];
        let assessments = vec![
            assessment(1, "Quiz", 100, "Term 1", None),
            assessment(2, "Final", 100, "Term 2", None),
        ];
        let marks = vec![mark(1, 1, 70.0), mark(2, 2, 95.0)];

        let report = assemble_report(
            &student(1, "Amara"),
            None,
            "Term 2",
            &marks,
            &index(&assessments, |a| a.id),
            &index(&subjects, |s| s.id),
        );

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].assessment, "Final");
    }

    #[test]
    fn test_empty_term_report_is_zero_valued() {
        let subjects: Vec<Subject> = Vec::new();
        let assessments: Vec<Assessment> = Vec::new();
        let marks: Vec<Mark> = Vec::new();

        let report = assemble_report(
            &student(1, "Amara"),
            None,
            "Term 1",
            &marks,
            &index(&assessments, |a| a.id),
            &index(&subjects, |s| s.id),
        );

        assert!(report.rows.is_empty());
        assert_eq!(report.overall_percentage, 0.0);
        assert_eq!(report.overall_grade, Grade::E);
        assert_eq!(report.comment, comment_for(0.0));
    }

    #[test]
    fn test_comment_ladder_is_monotonic() {
        let comments = [
            comment_for(0.0),
            comment_for(59.99),
            comment_for(60.0),
            comment_for(74.99),
            comment_for(75.0),
            comment_for(89.99),
            comment_for(90.0),
            comment_for(120.0),
        ];
        // 阶梯只在阈值处变化
        assert_eq!(comments[0], comments[1]);
        assert_eq!(comments[2], comments[3]);
        assert_eq!(comments[4], comments[5]);
        assert_eq!(comments[6], comments[7]);
        assert_ne!(comments[1], comments[2]);
        assert_ne!(comments[3], comments[4]);
        assert_ne!(comments[5], comments[6]);
    }

    #[test]
    fn test_per_row_grades() {
        let subjects = vec![subject(1, "Maths")];
        let assessments = vec![assessment(1, "Quiz", 50, "Term 1", None)];
        let marks = vec![mark(1, 1, 19.0)];

        let report = assemble_report(
            &student(1, "Amara"),
            None,
            "Term 1",
            &marks,
            &index(&assessments, |a| a.id),
            &index(&subjects, |s| s.id),
        );

        assert_eq!(report.rows[0].percentage, 38.0);
        assert_eq!(report.rows[0].grade, Grade::E);
        assert_eq!(report.rows[0].subject.as_deref(), Some("Maths"));
    }
}
