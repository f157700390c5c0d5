use match_profile_stats::PlayerStats;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    WinRate,
    AvgScore,
    Attendance,
    Stability,
    MaxScore,
}

impl Category {
    /// The statistic the category's ladder is evaluated on.
    pub fn metric(self, stats: &PlayerStats) -> f64 {
        match self {
            Category::WinRate => stats.win_rate,
            Category::AvgScore => stats.avg_score as f64,
            Category::Attendance => stats.attendance_rate,
            Category::Stability => stats.score_std_dev,
            Category::MaxScore => stats.max_score as f64,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::WinRate => "胜率表现",
            Category::AvgScore => "得分能力",
            Category::Attendance => "参与程度",
            Category::Stability => "表现稳定性",
            Category::MaxScore => "单场爆发",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::WinRate => "winRate",
            Category::AvgScore => "avgScore",
            Category::Attendance => "attendance",
            Category::Stability => "stability",
            Category::MaxScore => "maxScore",
        })
    }
}
