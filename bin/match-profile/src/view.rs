use crate::config::OutputFormat;
use crate::profile::ProfileContext;
use indoc::formatdoc;
use match_profile_evaluation::Achievement;
use match_profile_stats::{NormalizedRadarVector, PlayerStats};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView<'a> {
    pub player_id: &'a str,
    pub stats: &'a PlayerStats,
    pub radar: NormalizedRadarVector,
    pub achievements: Vec<Achievement>,
}

impl<'a> ProfileView<'a> {
    pub fn build(context: &'a ProfileContext, player_id: &'a str) -> Option<Self> {
        Some(Self {
            player_id,
            stats: context.get_user_stats(player_id)?,
            radar: context.get_normalized_radar_data(player_id)?,
            achievements: context.get_user_achievements(player_id),
        })
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_text(&self) -> String {
        let stats = self.stats;
        let mut text = formatdoc! {"
            {player_id} 的用户画像
            总参与场次: {total_games} 场
            胜率: {win_rate:.1}%
            平均得分: {avg_score}
            单场最高分: {max_score}
            得分稳定性: {std_dev:.1}
            出勤率: {attendance:.1}%

            战力图:
            ",
            player_id = self.player_id,
            total_games = stats.total_games,
            win_rate = stats.win_rate,
            avg_score = stats.avg_score,
            max_score = stats.max_score,
            std_dev = stats.score_std_dev,
            attendance = stats.attendance_rate,
        };
        for (axis, value) in NormalizedRadarVector::AXES.iter().zip(self.radar.values()) {
            text.push_str(&format!("  {axis}: {value:.1}\n"));
        }
        text.push_str("\n成就:\n");
        for achievement in &self.achievements {
            text.push_str(&format!(
                "  {} {} ({})\n",
                achievement.icon,
                achievement.label,
                achievement.category.description()
            ));
        }
        text
    }
}

/// Answer a login attempt with the rendered profile or a short notice.
pub fn respond(
    context: &ProfileContext,
    player_id: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if !context.is_ready() {
        return Ok("Match data is unavailable".to_string());
    }
    if !context.is_valid_user_id(player_id) {
        return Ok(format!("Unknown player id: {player_id}"));
    }
    match ProfileView::build(context, player_id) {
        Some(view) => view.render(format),
        None => Ok(format!("{player_id} has no scored matches")),
    }
}
