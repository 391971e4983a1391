use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// "Item `key` became visible / stopped being visible", as delivered by the
/// host's scrollable collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityReport<K> {
    pub key: K,
    pub is_visible: bool,
}

impl<K> VisibilityReport<K> {
    pub fn visible(key: K) -> Self {
        Self {
            key,
            is_visible: true,
        }
    }
    pub fn hidden(key: K) -> Self {
        Self {
            key,
            is_visible: false,
        }
    }
}

/// Last known visibility per item identity.
///
/// Reports replace the previous entry for the same key, so the map never
/// holds more than one entry per item no matter how often it scrolls in and
/// out of view. Keys never reported read as not visible.
#[derive(Clone, Debug)]
pub struct ViewabilityTracker<K> {
    items: HashMap<K, bool>,
}

impl<K: Eq + Hash> Default for ViewabilityTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> ViewabilityTracker<K> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Upserts one report. Returns true if the stored visibility changed.
    pub fn report(&mut self, key: K, is_visible: bool) -> bool {
        self.items.insert(key, is_visible) != Some(is_visible)
    }

    /// Applies a batch strictly in arrival order; a later report for the same
    /// key wins. Returns how many reports changed stored state.
    pub fn apply<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = VisibilityReport<K>>,
    {
        let mut changed = 0;
        let mut seen = 0;
        for r in batch {
            seen += 1;
            if self.report(r.key, r.is_visible) {
                changed += 1;
            }
        }
        log::trace!(
            "viewability: applied {seen} reports, {changed} changed, {} tracked",
            self.items.len()
        );
        changed
    }

    pub fn is_visible<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.get(key).copied().unwrap_or(false)
    }

    /// Number of identities with a stored entry, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible_keys(&self) -> impl Iterator<Item = &K> {
        self.items
            .iter()
            .filter_map(|(k, visible)| visible.then_some(k))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_report_replaces_earlier_one() {
        let mut t = ViewabilityTracker::new();
        t.apply([
            VisibilityReport::visible("A"),
            VisibilityReport::hidden("A"),
            VisibilityReport::visible("B"),
        ]);
        assert!(!t.is_visible("A"));
        assert!(t.is_visible("B"));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn unknown_keys_are_hidden() {
        let t: ViewabilityTracker<u32> = ViewabilityTracker::new();
        assert!(!t.is_visible(&7));
        assert!(t.is_empty());
    }

    #[test]
    fn scrolling_back_and_forth_does_not_grow() {
        let mut t = ViewabilityTracker::new();
        for round in 0..50 {
            let on = round % 2 == 0;
            t.apply((0..10).map(|k| VisibilityReport {
                key: k,
                is_visible: on,
            }));
        }
        assert_eq!(t.len(), 10);
        assert_eq!(t.visible_keys().count(), 0);
    }

    #[test]
    fn change_count_ignores_repeats() {
        let mut t = ViewabilityTracker::new();
        assert_eq!(t.apply([VisibilityReport::visible(1), VisibilityReport::visible(1)]), 1);
        assert!(!t.report(1, true));
        assert!(t.report(1, false));
    }

    #[test]
    fn string_keys_query_by_str() {
        let mut t = ViewabilityTracker::new();
        t.report(String::from("row-3"), true);
        assert!(t.is_visible("row-3"));
    }
}
