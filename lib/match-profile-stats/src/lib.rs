use match_profile_records::MatchRecord;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

pub use radar::{NormalizedRadarVector, PopulationBounds};
pub use stats::PlayerStats;

pub mod radar;
pub mod stats;

/// Statistics of every player, keyed by player id.
pub type PlayerStatsMap = BTreeMap<String, PlayerStats>;

/// Number of distinct match dates over all records. This is the attendance
/// denominator shared by every player.
pub fn total_matches(records: &[MatchRecord]) -> usize {
    records
        .iter()
        .map(|record| record.match_date.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Group the records by player and summarize each group.
pub fn aggregate(records: &[MatchRecord]) -> PlayerStatsMap {
    let total_matches = total_matches(records);

    let mut games: HashMap<&str, Vec<&MatchRecord>> = HashMap::new();
    for record in records {
        games.entry(record.player_id.as_str()).or_default().push(record);
    }
    debug!(
        "Aggregating {} records of {} players over {total_matches} matches",
        records.len(),
        games.len()
    );

    games
        .into_iter()
        .map(|(player_id, records)| {
            (
                player_id.to_string(),
                PlayerStats::from_records(&records, total_matches),
            )
        })
        .collect()
}

/// Scale one player's statistics against the current population. Returns
/// `None` when the player has no statistics.
pub fn normalize(player_id: &str, stats: &PlayerStatsMap) -> Option<NormalizedRadarVector> {
    let player = stats.get(player_id)?;
    let bounds = PopulationBounds::from_stats(stats.values())?;
    Some(bounds.normalize(player))
}
