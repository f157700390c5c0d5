use crate::source::TableSource;
use anyhow::Context as _;
use match_profile_evaluation::{Achievement, AchievementClassifier};
use match_profile_records::{ingest, KnownIds, TableFormat};
use match_profile_stats::{
    aggregate, normalize, NormalizedRadarVector, PlayerStats, PlayerStatsMap, PopulationBounds,
};
use tracing::{debug, error, info};

/// Everything computed from one load of the match record table.
#[derive(Debug)]
pub struct LoadedProfiles {
    known_ids: KnownIds,
    stats: PlayerStatsMap,
    classifier: AchievementClassifier,
}

/// Query surface handed to the presentation layer. A failed load leaves the
/// context [`ProfileContext::NotReady`] and every query answers not-found.
#[derive(Debug, Default)]
pub enum ProfileContext {
    #[default]
    NotReady,
    Ready(LoadedProfiles),
}

impl ProfileContext {
    /// Fetch the table once and build the context. Errors are logged, not returned.
    pub async fn load(source: &dyn TableSource, format: &TableFormat) -> Self {
        match Self::try_load(source, format).await {
            Ok(context) => context,
            Err(e) => {
                error!("Failed to load match records: {e:?}");
                Self::NotReady
            }
        }
    }

    async fn try_load(source: &dyn TableSource, format: &TableFormat) -> anyhow::Result<Self> {
        let raw = source
            .fetch()
            .await
            .with_context(|| format!("Failed to fetch match records from {source:?}"))?;
        Self::from_table(&raw, format).context("Failed to parse match records")
    }

    pub fn from_table(
        raw: &str,
        format: &TableFormat,
    ) -> Result<Self, match_profile_records::Error> {
        let ingested = ingest(raw, format)?;
        let stats = aggregate(&ingested.records);
        info!(
            "Loaded {} match records of {} known players ({} rows skipped)",
            ingested.records.len(),
            ingested.known_ids.len(),
            ingested.skipped_rows
        );
        if let Some(bounds) = PopulationBounds::from_stats(stats.values()) {
            debug!("Population bounds: {bounds:?}");
        }

        Ok(Self::Ready(LoadedProfiles {
            known_ids: ingested.known_ids,
            stats,
            classifier: AchievementClassifier::new(),
        }))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    fn loaded(&self) -> Option<&LoadedProfiles> {
        match self {
            Self::Ready(loaded) => Some(loaded),
            Self::NotReady => None,
        }
    }

    /// Login check. Known ids include players whose rows all had unusable scores.
    pub fn is_valid_user_id(&self, player_id: &str) -> bool {
        self.loaded()
            .is_some_and(|loaded| loaded.known_ids.contains(player_id))
    }

    pub fn get_user_stats(&self, player_id: &str) -> Option<&PlayerStats> {
        self.loaded()?.stats.get(player_id)
    }

    pub fn get_normalized_radar_data(&self, player_id: &str) -> Option<NormalizedRadarVector> {
        normalize(player_id, &self.loaded()?.stats)
    }

    /// Empty when the player has no statistics.
    pub fn get_user_achievements(&self, player_id: &str) -> Vec<Achievement> {
        let Some(loaded) = self.loaded() else {
            return Vec::new();
        };
        loaded
            .stats
            .get(player_id)
            .map(|stats| loaded.classifier.classify(stats).to_vec())
            .unwrap_or_default()
    }
}
