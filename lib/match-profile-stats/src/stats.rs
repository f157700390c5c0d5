use match_profile_records::MatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Summary of every record of a single player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_games: usize,
    pub wins: usize,
    /// Percentage, one decimal
    pub win_rate: f64,
    pub avg_score: i64,
    pub max_score: i64,
    /// Population standard deviation of the scores, one decimal
    pub score_std_dev: f64,
    /// Percentage of all logged match dates the player shows up in, one decimal
    pub attendance_rate: f64,
    /// Saturates at the `i64` bounds
    pub total_score: i64,
}

impl PlayerStats {
    /// Summarize the records of one player. `total_matches` is the number of
    /// distinct match dates over the whole table.
    pub fn from_records(records: &[&MatchRecord], total_matches: usize) -> Self {
        let total_games = records.len();
        let wins = records.iter().filter(|record| record.is_win).count();
        // Widened so that extreme scores cannot overflow the sum
        let wide_total = records
            .iter()
            .map(|record| i128::from(record.score))
            .sum::<i128>();
        let total_score = i64::try_from(wide_total).unwrap_or(if wide_total < 0 {
            i64::MIN
        } else {
            i64::MAX
        });
        let max_score = records
            .iter()
            .map(|record| record.score)
            .max()
            .unwrap_or_default();

        let (win_rate, mean, variance) = if total_games > 0 {
            let n = total_games as f64;
            let mean = wide_total as f64 / n;
            let variance = records
                .iter()
                .map(|record| (record.score as f64 - mean).powi(2))
                .sum::<f64>()
                / n;
            (wins as f64 / n * 100.0, mean, variance)
        } else {
            (0.0, 0.0, 0.0)
        };

        let attended = records
            .iter()
            .map(|record| record.match_date.as_str())
            .collect::<HashSet<_>>()
            .len();
        let attendance_rate = if total_matches > 0 {
            attended as f64 / total_matches as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_games,
            wins,
            win_rate: round_to(win_rate, 1),
            avg_score: mean.round() as i64,
            max_score,
            score_std_dev: round_to(variance.sqrt(), 1),
            attendance_rate: round_to(attendance_rate, 1),
            total_score,
        }
    }
}

/// Round half away from zero to the given number of decimals.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
