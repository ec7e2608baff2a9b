//! The current alert and the recent history.

use std::borrow::Cow;

use crate::alert::Alert;
use crate::region::{self, RegionId};

/// Maximum number of history entries kept, matching the server-side query limit.
pub const HISTORY_LIMIT: usize = 200;

/// An alert viewed through a region filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredAlert<'a> {
    pub alert: &'a Alert,
    /// Locations shown under the region, in broadcast order.
    pub locations: Cow<'a, [String]>,
    /// How many of the alert's locations the filter hid.
    pub hidden: usize,
}

impl FilteredAlert<'_> {
    /// True when nothing is left to show after filtering.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Holds the single current alert and the last fetched history.
///
/// Filtered views are derived on read; stored data is never narrowed.
#[derive(Debug, Default)]
pub struct AlertStore {
    current: Option<Alert>,
    history: Vec<Alert>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[Alert] {
        &self.history
    }

    /// Replace the current alert. Has no effect on history.
    pub fn set_current(&mut self, alert: Option<Alert>) {
        self.current = alert;
    }

    /// Replace the whole history list, keeping at most [`HISTORY_LIMIT`] entries.
    pub fn set_history(&mut self, mut items: Vec<Alert>) {
        items.truncate(HISTORY_LIMIT);
        self.history = items;
    }

    /// The current alert with its locations filtered to `region`.
    ///
    /// An alert with no matching locations is still returned; only the
    /// absence of a current alert yields `None`.
    pub fn filtered_current(&self, region: RegionId) -> Option<FilteredAlert<'_>> {
        self.current.as_ref().map(|alert| {
            let locations = region::filter_locations(&alert.locations, region);
            let hidden = alert.locations.len() - locations.len();
            FilteredAlert {
                alert,
                locations,
                hidden,
            }
        })
    }

    /// History entries with at least one location in `region`.
    pub fn filtered_history(&self, region: RegionId) -> Vec<&Alert> {
        self.history
            .iter()
            .filter(|h| region::matches(&h.locations, region))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rockets() -> Alert {
        Alert::new("1", "1", "ירי רקטות", ["עזה", "אשקלון", "שדרות"])
    }

    #[test]
    fn test_set_current_leaves_history_alone() {
        let mut store = AlertStore::new();
        store.set_history(vec![rockets()]);
        store.set_current(Some(Alert::new("2", "1", "t", ["חיפה"])));
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.current().unwrap().id, "2");

        store.set_current(None);
        assert!(store.current().is_none());
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_filtered_current_does_not_mutate() {
        let mut store = AlertStore::new();
        store.set_current(Some(rockets()));

        let south = store.filtered_current(RegionId::South).unwrap();
        assert_eq!(south.locations.as_ref(), ["אשקלון".to_string()]);
        assert_eq!(south.hidden, 2);

        let all = store.filtered_current(RegionId::All).unwrap();
        assert_eq!(all.locations.len(), 3);
        assert_eq!(all.hidden, 0);
        assert_eq!(store.current().unwrap().locations.len(), 3);
    }

    #[test]
    fn test_alert_with_no_matching_locations_stays_current() {
        let mut store = AlertStore::new();
        store.set_current(Some(rockets()));

        let north = store.filtered_current(RegionId::North).unwrap();
        assert!(north.is_empty());
        assert_eq!(north.hidden, 3);
        assert_eq!(north.alert.id, "1");
    }

    #[test]
    fn test_no_current_alert() {
        let store = AlertStore::new();
        assert!(store.filtered_current(RegionId::All).is_none());
    }

    #[test]
    fn test_filtered_history() {
        let mut store = AlertStore::new();
        store.set_history(vec![
            rockets(),
            Alert::new("2", "6", "כטב״מ", ["חיפה", "עכו"]),
            Alert::new("3", "1", "ירי רקטות", ["עזה"]),
        ]);

        assert_eq!(store.filtered_history(RegionId::All).len(), 3);

        let haifa: Vec<_> = store
            .filtered_history(RegionId::Haifa)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(haifa, vec!["2"]);

        assert!(store.filtered_history(RegionId::Jerusalem).is_empty());
    }

    #[test]
    fn test_history_is_bounded_and_replaced() {
        let mut store = AlertStore::new();
        let many: Vec<_> = (0..HISTORY_LIMIT + 25)
            .map(|i| Alert::new(i.to_string(), "1", "t", ["שדרות"]))
            .collect();
        store.set_history(many);
        assert_eq!(store.history().len(), HISTORY_LIMIT);
        assert_eq!(store.history()[0].id, "0");

        store.set_history(vec![rockets()]);
        assert_eq!(store.history().len(), 1);
    }
}
