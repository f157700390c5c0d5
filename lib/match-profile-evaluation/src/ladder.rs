use crate::category::Category;
use crate::label::{Badge, Tier};

/// How a statistic is compared against a rung's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Satisfied when the value is greater than or equal to the threshold.
    AtLeast,
    /// Satisfied when the value is strictly less than the threshold.
    Below,
}

impl Direction {
    pub fn admits(self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::AtLeast => value >= threshold,
            Direction::Below => value < threshold,
        }
    }
}

/// Walk `steps` in order and return the first entry whose threshold admits `value`.
pub fn first_match<T>(steps: &[(f64, T)], direction: Direction, value: f64) -> Option<&T> {
    steps
        .iter()
        .find(|(threshold, _)| direction.admits(value, *threshold))
        .map(|(_, item)| item)
}

/// Ordered thresholds of one category, best tier first, plus the catch-all
/// tier for values that satisfy none of them.
#[derive(Debug)]
pub struct Ladder {
    pub category: Category,
    pub direction: Direction,
    pub steps: &'static [(f64, Badge)],
    pub floor: Badge,
}

impl Ladder {
    /// NaN satisfies no threshold and lands on the floor.
    pub fn select(&self, value: f64) -> &Badge {
        first_match(self.steps, self.direction, value).unwrap_or(&self.floor)
    }
}

const fn badge(tier: Tier, label: &'static str, icon: &'static str) -> Badge {
    Badge { tier, label, icon }
}

pub static LADDERS: [Ladder; 5] = [
    Ladder {
        category: Category::WinRate,
        direction: Direction::AtLeast,
        steps: &[
            (80.0, badge(Tier::Legendary, "战神", "⭐")),
            (60.0, badge(Tier::Elite, "常胜将军", "✨")),
            (40.0, badge(Tier::Solid, "稳健选手", "🔥")),
            (20.0, badge(Tier::Rising, "拼搏者", "⚡")),
        ],
        floor: badge(Tier::Entry, "重在参与", "🌱"),
    },
    Ladder {
        category: Category::AvgScore,
        direction: Direction::AtLeast,
        steps: &[
            (2000.0, badge(Tier::Legendary, "得分王", "🏆")),
            (1000.0, badge(Tier::Elite, "高分高手", "💎")),
            (500.0, badge(Tier::Solid, "中坚力量", "🔥")),
            (100.0, badge(Tier::Rising, "稳定输出", "⚡")),
        ],
        floor: badge(Tier::Entry, "积累中", "🌱"),
    },
    Ladder {
        category: Category::Attendance,
        direction: Direction::AtLeast,
        steps: &[
            (90.0, badge(Tier::Legendary, "全勤王", "📅")),
            (70.0, badge(Tier::Elite, "活跃之星", "✨")),
            (50.0, badge(Tier::Solid, "经常参与", "🔄")),
            (30.0, badge(Tier::Rising, "偶尔露面", "👀")),
        ],
        floor: badge(Tier::Entry, "新秀", "🆕"),
    },
    Ladder {
        category: Category::Stability,
        direction: Direction::Below,
        steps: &[
            (300.0, badge(Tier::Legendary, "稳定先生", "🎯")),
            (600.0, badge(Tier::Elite, "表现平稳", "⚖️")),
            (1000.0, badge(Tier::Solid, "起伏型", "🎢")),
            (1500.0, badge(Tier::Rising, "大起大落", "🌊")),
        ],
        floor: badge(Tier::Entry, "过山车", "🎡"),
    },
    Ladder {
        category: Category::MaxScore,
        direction: Direction::AtLeast,
        steps: &[
            (5000.0, badge(Tier::Legendary, "纪录创造者", "🏅")),
            (3000.0, badge(Tier::Elite, "爆发型选手", "💥")),
            (1500.0, badge(Tier::Solid, "高光时刻", "🌟")),
            (500.0, badge(Tier::Rising, "潜力股", "📈")),
        ],
        floor: badge(Tier::Entry, "稳步成长", "🌿"),
    },
];
