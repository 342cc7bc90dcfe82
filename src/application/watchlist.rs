//! Concurrent set of watched players.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::domain::RiotId;

/// Lock-protected set of watched Riot IDs.
///
/// The polling loops never iterate the set directly; they take a
/// [`snapshot`](Watchlist::snapshot) at tick start so concurrent
/// add/remove requests from the command layer cannot invalidate the
/// iteration.
#[derive(Debug, Default)]
pub struct Watchlist {
    entries: RwLock<HashSet<RiotId>>,
}

impl Watchlist {
    /// Create an empty watchlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an identity. Returns `false` if it was already present.
    pub fn insert(&self, id: RiotId) -> bool {
        self.entries.write().insert(id)
    }

    /// Remove an identity. Returns `false` if it was not present.
    pub fn remove(&self, id: &RiotId) -> bool {
        self.entries.write().remove(id)
    }

    /// Whether an identity is currently watched.
    #[must_use]
    pub fn contains(&self, id: &RiotId) -> bool {
        self.entries.read().contains(id)
    }

    /// Copy of the current membership, in no particular order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RiotId> {
        self.entries.read().iter().cloned().collect()
    }

    /// Number of watched identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the watchlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> RiotId {
        RiotId::new(name, "KR1")
    }

    #[test]
    fn test_insert_and_remove() {
        let list = Watchlist::new();
        assert!(list.insert(id("a")));
        assert!(list.contains(&id("a")));
        assert!(list.remove(&id("a")));
        assert!(!list.contains(&id("a")));
        assert!(list.is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let list = Watchlist::new();
        assert!(list.insert(id("a")));
        assert!(!list.insert(id("a")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_absent_returns_false() {
        let list = Watchlist::new();
        assert!(!list.remove(&id("a")));
    }

    #[test]
    fn test_snapshot_is_detached_from_mutations() {
        let list = Watchlist::new();
        list.insert(id("a"));
        list.insert(id("b"));

        let snapshot = list.snapshot();
        list.remove(&id("a"));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(list.len(), 1);
    }
}
