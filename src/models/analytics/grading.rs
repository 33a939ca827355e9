//! 评分规则
//!
//! 百分比与等级换算的纯函数，所有统计路径共用同一套舍入规则：
//! 保留两位小数，0.5 远离零舍入（`f64::round` 语义）。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 等级，下界闭区间：>=85 A，>=70 B，>=55 C，>=40 D，其余 E
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/analytics.ts")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    // 全部等级，固定输出顺序
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 85.0 {
            Grade::A
        } else if pct >= 70.0 {
            Grade::B
        } else if pct >= 55.0 {
            Grade::C
        } else if pct >= 40.0 {
            Grade::D
        } else {
            Grade::E
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        };
        write!(f, "{s}")
    }
}

/// 保留两位小数，0.5 远离零舍入
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 计算百分比得分
///
/// 满分为 0（或未设置）时返回 0.0，不报错；得分超过满分时不截断。
pub fn percentage(score: f64, maximum: f64) -> f64 {
    if maximum == 0.0 {
        return 0.0;
    }
    round2(score / maximum * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_basic() {
        assert_eq!(percentage(80.0, 100.0), 80.0);
        assert_eq!(percentage(45.0, 60.0), 75.0);
        assert_eq!(percentage(1.0, 3.0), 33.33);
        assert_eq!(percentage(2.0, 3.0), 66.67);
    }

    #[test]
    fn test_percentage_zero_maximum() {
        assert_eq!(percentage(50.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(-10.0, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_over_maximum_not_clamped() {
        // 加分制下得分可以超过满分
        assert_eq!(percentage(110.0, 100.0), 110.0);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        // 0.125 可被二进制浮点精确表示，恰好落在 0.5 档位上
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(56.666666), 56.67);
    }

    #[test]
    fn test_grade_boundaries_inclusive() {
        assert_eq!(Grade::from_percentage(85.0), Grade::A);
        assert_eq!(Grade::from_percentage(84.99), Grade::B);
        assert_eq!(Grade::from_percentage(70.0), Grade::B);
        assert_eq!(Grade::from_percentage(69.99), Grade::C);
        assert_eq!(Grade::from_percentage(55.0), Grade::C);
        assert_eq!(Grade::from_percentage(40.0), Grade::D);
        assert_eq!(Grade::from_percentage(39.99), Grade::E);
    }

    #[test]
    fn test_grade_total_over_all_reals() {
        // 不做截断，极端输入也有定义
        assert_eq!(Grade::from_percentage(150.0), Grade::A);
        assert_eq!(Grade::from_percentage(0.0), Grade::E);
        assert_eq!(Grade::from_percentage(-25.0), Grade::E);
    }
}
