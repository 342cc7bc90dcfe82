//! Loss-streak alert deduplication.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::RiotId;

/// Per-player watermark of the last alerted streak length.
///
/// An alert fires only when the observed streak is at or above the
/// threshold and differs from the watermark. The watermark is updated
/// exclusively when an alert fires, so:
///
/// - re-observing an unchanged streak on a later poll is silent;
/// - a streak that keeps growing (3, 4, 5, ...) re-alerts at every new
///   length.
///
/// Entries live for the process lifetime; one that belongs to a player
/// no longer watched is inert but not purged.
#[derive(Debug)]
pub struct StreakTracker {
    threshold: usize,
    last_alerted: Mutex<HashMap<RiotId, usize>>,
}

impl StreakTracker {
    /// Create a tracker that alerts at `threshold` consecutive losses.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            last_alerted: Mutex::new(HashMap::new()),
        }
    }

    /// Record one streak observation.
    ///
    /// Returns `true` when the observation qualifies for an alert, in
    /// which case the watermark is advanced atomically under the same
    /// lock. The check and the update are one critical section so two
    /// concurrent observations of the same player cannot both fire.
    pub fn observe(&self, id: &RiotId, streak: usize) -> bool {
        if streak < self.threshold {
            return false;
        }

        let mut watermarks = self.last_alerted.lock();
        if watermarks.get(id) == Some(&streak) {
            return false;
        }
        watermarks.insert(id.clone(), streak);
        true
    }

    /// The last alerted streak length for a player, if any.
    #[must_use]
    pub fn watermark(&self, id: &RiotId) -> Option<usize> {
        self.last_alerted.lock().get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> RiotId {
        RiotId::new("Faker", "T1")
    }

    #[test]
    fn test_below_threshold_never_fires() {
        let tracker = StreakTracker::new(3);
        assert!(!tracker.observe(&id(), 0));
        assert!(!tracker.observe(&id(), 2));
        assert_eq!(tracker.watermark(&id()), None);
    }

    #[test]
    fn test_first_qualifying_streak_fires() {
        let tracker = StreakTracker::new(3);
        assert!(tracker.observe(&id(), 3));
        assert_eq!(tracker.watermark(&id()), Some(3));
    }

    #[test]
    fn test_same_streak_does_not_refire() {
        let tracker = StreakTracker::new(3);
        assert!(tracker.observe(&id(), 3));
        assert!(!tracker.observe(&id(), 3));
        assert!(!tracker.observe(&id(), 3));
    }

    #[test]
    fn test_growing_streak_refires_each_length() {
        let tracker = StreakTracker::new(3);
        assert!(tracker.observe(&id(), 3));
        assert!(tracker.observe(&id(), 4));
        assert!(tracker.observe(&id(), 5));
        assert_eq!(tracker.watermark(&id()), Some(5));
    }

    #[test]
    fn test_sub_threshold_streak_leaves_watermark_untouched() {
        let tracker = StreakTracker::new(3);
        assert!(tracker.observe(&id(), 4));
        assert!(!tracker.observe(&id(), 0));
        assert_eq!(tracker.watermark(&id()), Some(4));
    }

    #[test]
    fn test_threshold_reached_again_after_reset_fires() {
        // Streak 4 alerted, then a win resets the run, then three fresh
        // losses: 3 differs from the watermark 4, so it fires.
        let tracker = StreakTracker::new(3);
        assert!(tracker.observe(&id(), 4));
        assert!(!tracker.observe(&id(), 0));
        assert!(tracker.observe(&id(), 3));
        assert_eq!(tracker.watermark(&id()), Some(3));
    }

    #[test]
    fn test_players_are_independent() {
        let tracker = StreakTracker::new(3);
        let other = RiotId::new("Chovy", "GEN");
        assert!(tracker.observe(&id(), 3));
        assert!(tracker.observe(&other, 3));
    }
}
