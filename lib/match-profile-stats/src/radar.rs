use crate::stats::PlayerStats;
use serde::Serialize;

/// Stability reported for every player when the whole population shares the
/// same score dispersion.
pub const FLAT_STABILITY: f64 = 100.0;

/// Population extrema that the radar values are scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationBounds {
    pub max_win_rate: f64,
    pub max_avg_score: f64,
    pub max_max_score: f64,
    pub max_attendance_rate: f64,
    pub min_std_dev: f64,
    pub max_std_dev: f64,
}

impl PopulationBounds {
    /// Returns `None` for an empty population.
    pub fn from_stats<'a>(stats: impl IntoIterator<Item = &'a PlayerStats>) -> Option<Self> {
        let mut stats = stats.into_iter();
        let first = stats.next()?;
        let initial = Self {
            max_win_rate: first.win_rate,
            max_avg_score: first.avg_score as f64,
            max_max_score: first.max_score as f64,
            max_attendance_rate: first.attendance_rate,
            min_std_dev: first.score_std_dev,
            max_std_dev: first.score_std_dev,
        };
        Some(stats.fold(initial, |bounds, stats| Self {
            max_win_rate: bounds.max_win_rate.max(stats.win_rate),
            max_avg_score: bounds.max_avg_score.max(stats.avg_score as f64),
            max_max_score: bounds.max_max_score.max(stats.max_score as f64),
            max_attendance_rate: bounds.max_attendance_rate.max(stats.attendance_rate),
            min_std_dev: bounds.min_std_dev.min(stats.score_std_dev),
            max_std_dev: bounds.max_std_dev.max(stats.score_std_dev),
        }))
    }

    pub fn normalize(&self, stats: &PlayerStats) -> NormalizedRadarVector {
        let stability = if self.max_std_dev == self.min_std_dev {
            FLAT_STABILITY
        } else {
            100.0 * (self.max_std_dev - stats.score_std_dev) / (self.max_std_dev - self.min_std_dev)
        };

        NormalizedRadarVector {
            win_rate: scale(stats.win_rate, self.max_win_rate),
            avg_score: scale(stats.avg_score as f64, self.max_avg_score),
            max_score: scale(stats.max_score as f64, self.max_max_score),
            // Already a percentage
            attendance_rate: stats.attendance_rate,
            stability,
        }
    }
}

/// A player's statistics relative to the rest of the population, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRadarVector {
    pub win_rate: f64,
    pub avg_score: f64,
    pub max_score: f64,
    pub attendance_rate: f64,
    /// Higher means a smaller score standard deviation
    pub stability: f64,
}

impl NormalizedRadarVector {
    pub const AXES: [&'static str; 5] = ["胜率", "平均得分", "单场最高分", "出勤率", "稳定性"];

    /// Values in the order of [`Self::AXES`].
    pub fn values(&self) -> [f64; 5] {
        [
            self.win_rate,
            self.avg_score,
            self.max_score,
            self.attendance_rate,
            self.stability,
        ]
    }
}

/// A non-positive maximum means nobody in the population scored on this axis.
/// Negative values sit at the bottom of the axis.
fn scale(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (100.0 * value / max).clamp(0.0, 100.0)
    }
}
