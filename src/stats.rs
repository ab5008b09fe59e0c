use crate::decision::engine::Verdict;
use crate::preferences::interface::PersistentPreferences;
use serde::{Deserialize, Serialize};

pub const STATS_KEY: &str = "recycle_stats";

/// Running tally of decisions, persisted as JSON in the preferences store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleStats {
    pub total: u64,
    pub recycled: u64,
    pub trash: u64,
}

impl RecycleStats {
    /// Unreadable or missing stored stats reset to zero rather than fail.
    pub fn load(preferences: &dyn PersistentPreferences) -> Self {
        preferences
            .get(STATS_KEY)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(
        &self,
        preferences: &dyn PersistentPreferences,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let json = serde_json::to_string(self)?;
        preferences.set(STATS_KEY, &json)
    }

    pub fn record(&mut self, verdict: Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Recyclable => self.recycled += 1,
            Verdict::Trash => self.trash += 1,
        }
    }

    pub fn recycled_percentage(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (self.recycled * 100 + self.total / 2) / self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::impl_memory::PreferencesMemory;

    #[test]
    fn test_record_counts_both_verdicts() {
        let mut stats = RecycleStats::default();

        stats.record(Verdict::Recyclable);
        stats.record(Verdict::Recyclable);
        stats.record(Verdict::Trash);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.recycled, 2);
        assert_eq!(stats.trash, 1);
        assert_eq!(stats.recycled_percentage(), 67);
    }

    #[test]
    fn test_round_trip_through_preferences() {
        let prefs = PreferencesMemory::new();
        let mut stats = RecycleStats::default();
        stats.record(Verdict::Trash);

        stats.save(&prefs).unwrap();

        assert_eq!(RecycleStats::load(&prefs), stats);
    }

    #[test]
    fn test_load_defaults_on_garbage() {
        let prefs = PreferencesMemory::new();
        prefs.set(STATS_KEY, "not json").unwrap();

        assert_eq!(RecycleStats::load(&prefs), RecycleStats::default());
    }

    #[test]
    fn test_percentage_of_empty_stats_is_zero() {
        assert_eq!(RecycleStats::default().recycled_percentage(), 0);
    }
}
