use crate::ladder::{Ladder, LADDERS};
use crate::label::Achievement;
use match_profile_stats::PlayerStats;

#[derive(Debug)]
pub struct AchievementClassifier {
    ladders: &'static [Ladder; 5],
}

impl Default for AchievementClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementClassifier {
    pub fn new() -> Self {
        Self { ladders: &LADDERS }
    }

    /// One achievement per category, in ladder order. Each category is judged
    /// on its own statistic only.
    pub fn classify(&self, stats: &PlayerStats) -> [Achievement; 5] {
        self.ladders.each_ref().map(|ladder| {
            let badge = ladder.select(ladder.category.metric(stats));
            Achievement::new(ladder.category, badge)
        })
    }
}
