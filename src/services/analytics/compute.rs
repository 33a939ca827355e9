//! 统计计算核心
//!
//! 全部是对请求期内存快照的纯计算：入参是存储层一次性批量加载的
//! 实体集合，函数内部只做 ID 关联和数值聚合，不做任何 I/O，也不
//! 在两次调用之间保留状态。相同输入必然产生相同输出。

use std::collections::HashMap;

use crate::models::analytics::grading::{Grade, percentage, round2};
use crate::models::analytics::responses::{
    ClassOverview, GradeBucket, SubjectSummary, TopStudent, TrendPoint,
};
use crate::models::assessments::entities::Assessment;
use crate::models::marks::entities::Mark;
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;

/// 及格线（百分比）
pub const PASS_THRESHOLD: f64 = 40.0;

/// 按 ID 建立测评索引
pub fn assessment_index(assessments: &[Assessment]) -> HashMap<i64, &Assessment> {
    assessments.iter().map(|a| (a.id, a)).collect()
}

/// 一组百分比的平均值，空集合计为 0
pub fn mean_percentage(percentages: &[f64]) -> f64 {
    if percentages.is_empty() {
        return 0.0;
    }
    round2(percentages.iter().sum::<f64>() / percentages.len() as f64)
}

/// 学生成绩走势：按成绩的录入顺序输出，不重排
///
/// 找不到对应测评的成绩直接跳过。
pub fn student_trend_points(
    marks: &[Mark],
    assessments: &HashMap<i64, &Assessment>,
) -> Vec<TrendPoint> {
    marks
        .iter()
        .filter_map(|mark| {
            assessments.get(&mark.assessment_id).map(|assessment| TrendPoint {
                assessment: assessment.name.clone(),
                percentage: percentage(mark.score, assessment.maximum_marks as f64),
                term: assessment.term.clone(),
            })
        })
        .collect()
}

/// 学生平均分：学生ID、姓名、平均百分比、成绩数量
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAverage {
    pub student_id: i64,
    pub student_name: String,
    pub average: f64,
    pub mark_count: usize,
}

/// 计算每个学生跨全部成绩的平均百分比
///
/// 结果保持学生集合的迭代顺序；没有成绩的学生平均分计为 0。
pub fn student_averages(
    students: &[Student],
    marks: &[Mark],
    assessments: &HashMap<i64, &Assessment>,
) -> Vec<StudentAverage> {
    let mut per_student: HashMap<i64, Vec<f64>> = HashMap::new();
    for mark in marks {
        if let Some(assessment) = assessments.get(&mark.assessment_id) {
            per_student
                .entry(mark.student_id)
                .or_default()
                .push(percentage(mark.score, assessment.maximum_marks as f64));
        }
    }

    students
        .iter()
        .map(|student| {
            let pcts = per_student
                .get(&student.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            StudentAverage {
                student_id: student.id,
                student_name: student.name.clone(),
                average: mean_percentage(pcts),
                mark_count: pcts.len(),
            }
        })
        .collect()
}

/// 班级概览与前5名
///
/// 没有学生时返回 None，由调用方翻译为 404。
/// 排名使用稳定排序：平均分相同的学生保持原有迭代顺序。
pub fn class_overview(
    class_name: &str,
    averages: &[StudentAverage],
) -> Option<(ClassOverview, Vec<TopStudent>)> {
    if averages.is_empty() {
        return None;
    }

    let values: Vec<f64> = averages.iter().map(|a| a.average).collect();
    let average = mean_percentage(&values);
    let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
    let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pass_count = values.iter().filter(|v| **v >= PASS_THRESHOLD).count();
    let pass_rate = round2(pass_count as f64 / values.len() as f64 * 100.0);

    let mut top_students: Vec<TopStudent> = averages
        .iter()
        .map(|a| TopStudent {
            student_name: a.student_name.clone(),
            average: a.average,
        })
        .collect();
    top_students.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top_students.truncate(5);

    Some((
        ClassOverview {
            class_name: class_name.to_string(),
            average,
            minimum,
            maximum,
            pass_rate,
        },
        top_students,
    ))
}

/// 各科目平均分
///
/// 逐条成绩换算百分比后取平均；一条成绩都没有的科目不输出。
pub fn subject_summaries(
    subjects: &[Subject],
    assessments: &[Assessment],
    marks: &[Mark],
) -> Vec<SubjectSummary> {
    let index = assessment_index(assessments);

    let mut per_subject: HashMap<i64, Vec<f64>> = HashMap::new();
    for mark in marks {
        if let Some(assessment) = index.get(&mark.assessment_id) {
            per_subject
                .entry(assessment.subject_id)
                .or_default()
                .push(percentage(mark.score, assessment.maximum_marks as f64));
        }
    }

    subjects
        .iter()
        .filter_map(|subject| {
            per_subject.get(&subject.id).map(|pcts| SubjectSummary {
                subject: subject.name.clone(),
                average: mean_percentage(pcts),
            })
        })
        .collect()
}

/// 等级分布
///
/// 只统计至少有一条成绩的学生；输出固定覆盖 A-E 全部等级，
/// 占比分母取有成绩学生数与 1 的较大者，避免除零。
/// 返回 (有成绩学生数, 各等级分布)。
pub fn grade_distribution(averages: &[StudentAverage]) -> (i64, Vec<GradeBucket>) {
    let graded: Vec<&StudentAverage> = averages.iter().filter(|a| a.mark_count > 0).collect();

    let mut counts: HashMap<Grade, i64> = HashMap::new();
    for avg in &graded {
        *counts.entry(Grade::from_percentage(avg.average)).or_default() += 1;
    }

    let denominator = (graded.len() as i64).max(1);
    let distribution = Grade::ALL
        .iter()
        .map(|grade| {
            let count = counts.get(grade).copied().unwrap_or(0);
            GradeBucket {
                grade: *grade,
                count,
                percentage: round2(count as f64 / denominator as f64 * 100.0),
            }
        })
        .collect();

    (graded.len() as i64, distribution)
}

/// 全体成绩的平均百分比与及格率
pub fn overall_mark_stats(marks: &[Mark], assessments: &HashMap<i64, &Assessment>) -> (f64, f64) {
    let pcts: Vec<f64> = marks
        .iter()
        .filter_map(|mark| {
            assessments
                .get(&mark.assessment_id)
                .map(|a| percentage(mark.score, a.maximum_marks as f64))
        })
        .collect();

    if pcts.is_empty() {
        return (0.0, 0.0);
    }

    let average = mean_percentage(&pcts);
    let pass_count = pcts.iter().filter(|p| **p >= PASS_THRESHOLD).count();
    let pass_rate = round2(pass_count as f64 / pcts.len() as f64 * 100.0);
    (average, pass_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

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

    fn assessment(id: i64, subject_id: i64, name: &str, maximum: i64, term: &str) -> Assessment {
        Assessment {
            id,
            name: name.to_string(),
            kind: "Exam".to_string(),
            maximum_marks: maximum,
            term: term.to_string(),
            subject_id,
            date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn mark(id: i64, student_id: i64, assessment_id: i64, score: f64) -> Mark {
        Mark {
            id,
            student_id,
            assessment_id,
            score,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_trend_keeps_insertion_order() {
        let assessments = vec![
            assessment(1, 1, "Quiz 1", 10, "Term 1"),
            assessment(2, 1, "Midterm", 100, "Term 1"),
        ];
        let index = assessment_index(&assessments);
        // 录入顺序是 Midterm 在前，输出必须保持这个顺序
        let marks = vec![mark(1, 1, 2, 90.0), mark(2, 1, 1, 8.0)];

        let trend = student_trend_points(&marks, &index);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].assessment, "Midterm");
        assert_eq!(trend[0].percentage, 90.0);
        assert_eq!(trend[1].assessment, "Quiz 1");
        assert_eq!(trend[1].percentage, 80.0);
    }

    #[test]
    fn test_trend_skips_marks_without_assessment() {
        let assessments = vec![assessment(1, 1, "Quiz 1", 10, "Term 1")];
        let index = assessment_index(&assessments);
        let marks = vec![mark(1, 1, 1, 5.0), mark(2, 1, 999, 5.0)];

        let trend = student_trend_points(&marks, &index);
        assert_eq!(trend.len(), 1);
    }

    #[test]
    fn test_student_averages_markless_is_zero() {
        let students = vec![student(1, "Amara"), student(2, "Bo")];
        let assessments = vec![assessment(1, 1, "Quiz", 100, "Term 1")];
        let index = assessment_index(&assessments);
        let marks = vec![mark(1, 1, 1, 72.0)];

        let averages = student_averages(&students, &marks, &index);
        assert_eq!(averages[0].average, 72.0);
        assert_eq!(averages[0].mark_count, 1);
        assert_eq!(averages[1].average, 0.0);
        assert_eq!(averages[1].mark_count, 0);
    }

    #[test]
    fn test_class_overview_matches_expected_values() {
        // 三个学生平均分 80 / 60 / 30：均值 56.67，及格率 66.67
        let averages = vec![
            StudentAverage {
                student_id: 1,
                student_name: "A".into(),
                average: 80.0,
                mark_count: 2,
            },
            StudentAverage {
                student_id: 2,
                student_name: "B".into(),
                average: 60.0,
                mark_count: 2,
            },
            StudentAverage {
                student_id: 3,
                student_name: "C".into(),
                average: 30.0,
                mark_count: 2,
            },
        ];

        let (overview, top) = class_overview("10-A", &averages).unwrap();
        assert_eq!(overview.average, 56.67);
        assert_eq!(overview.minimum, 30.0);
        assert_eq!(overview.maximum, 80.0);
        assert_eq!(overview.pass_rate, 66.67);
        assert_eq!(top[0].student_name, "A");
        assert_eq!(top[2].student_name, "C");
    }

    #[test]
    fn test_class_overview_empty_is_none() {
        assert!(class_overview("10-A", &[]).is_none());
    }

    #[test]
    fn test_class_overview_top5_stable_ties() {
        let averages: Vec<StudentAverage> = (1..=6)
            .map(|i| StudentAverage {
                student_id: i,
                student_name: format!("S{i}"),
                average: 50.0,
                mark_count: 1,
            })
            .collect();

        let (_, top) = class_overview("10-A", &averages).unwrap();
        // 并列时保持原有顺序，且只取前5名
        assert_eq!(top.len(), 5);
        let names: Vec<&str> = top.iter().map(|t| t.student_name.as_str()).collect();
        assert_eq!(names, ["S1", "S2", "S3", "S4", "S5"]);
    }

    #[test]
    fn test_subject_summary_omits_markless_subjects() {
        let subjects = vec![subject(1, "Maths"), subject(2, "Art")];
        let assessments = vec![
            assessment(1, 1, "Quiz", 10, "Term 1"),
            assessment(2, 2, "Sketch", 10, "Term 1"),
        ];
        let marks = vec![mark(1, 1, 1, 9.0), mark(2, 2, 1, 6.0)];

        let summaries = subject_summaries(&subjects, &assessments, &marks);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].subject, "Maths");
        assert_eq!(summaries[0].average, 75.0);
    }

    #[test]
    fn test_grade_distribution_counts_and_percentages() {
        // 有成绩的学生平均分 90/72/50，外加一个无成绩学生（不计入分母）
        let averages = vec![
            StudentAverage {
                student_id: 1,
                student_name: "A".into(),
                average: 90.0,
                mark_count: 1,
            },
            StudentAverage {
                student_id: 2,
                student_name: "B".into(),
                average: 72.0,
                mark_count: 1,
            },
            StudentAverage {
                student_id: 3,
                student_name: "C".into(),
                average: 50.0,
                mark_count: 1,
            },
            StudentAverage {
                student_id: 4,
                student_name: "D".into(),
                average: 0.0,
                mark_count: 0,
            },
        ];

        let (graded, distribution) = grade_distribution(&averages);
        assert_eq!(graded, 3);

        let by_grade: std::collections::HashMap<Grade, &GradeBucket> =
            distribution.iter().map(|b| (b.grade, b)).collect();
        assert_eq!(by_grade[&Grade::A].count, 1);
        assert_eq!(by_grade[&Grade::B].count, 1);
        assert_eq!(by_grade[&Grade::C].count, 1);
        assert_eq!(by_grade[&Grade::D].count, 0);
        assert_eq!(by_grade[&Grade::E].count, 0);
        assert_eq!(by_grade[&Grade::A].percentage, 33.33);
        // 零计数的等级也要输出
        assert_eq!(distribution.len(), 5);
    }

    #[test]
    fn test_grade_distribution_no_graded_students() {
        let averages = vec![StudentAverage {
            student_id: 1,
            student_name: "A".into(),
            average: 0.0,
            mark_count: 0,
        }];

        let (graded, distribution) = grade_distribution(&averages);
        assert_eq!(graded, 0);
        for bucket in &distribution {
            assert_eq!(bucket.count, 0);
            assert_eq!(bucket.percentage, 0.0);
        }
    }

    #[test]
    fn test_overall_mark_stats() {
        let assessments = vec![assessment(1, 1, "Quiz", 100, "Term 1")];
        let index = assessment_index(&assessments);
        let marks = vec![
            mark(1, 1, 1, 80.0),
            mark(2, 2, 1, 35.0),
            mark(3, 3, 1, 45.0),
        ];

        let (average, pass_rate) = overall_mark_stats(&marks, &index);
        assert_eq!(average, 53.33);
        assert_eq!(pass_rate, 66.67);
    }

    #[test]
    fn test_overall_mark_stats_empty() {
        let index = HashMap::new();
        assert_eq!(overall_mark_stats(&[], &index), (0.0, 0.0));
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let students = vec![student(1, "Amara"), student(2, "Bo")];
        let assessments = vec![assessment(1, 1, "Quiz", 100, "Term 1")];
        let index = assessment_index(&assessments);
        let marks = vec![mark(1, 1, 1, 66.0), mark(2, 2, 1, 42.0)];

        let first = student_averages(&students, &marks, &index);
        let second = student_averages(&students, &marks, &index);
        assert_eq!(first, second);
    }
}
