//! Read models derived from the store for the selected region.
//!
//! These are what a front end shows: the active alert card, the location
//! count badge, and the history list. Nothing here mutates the store.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Asia::Jerusalem;

use crate::alert::Alert;
use crate::category::category;
use crate::region::RegionId;
use crate::store::AlertStore;

/// Locations listed per history row before collapsing into a count.
const HISTORY_LOCATIONS_SHOWN: usize = 4;

const HEBREW_MONTHS: [&str; 12] = [
    "בינו׳", "בפבר׳", "במרץ", "באפר׳", "במאי", "ביוני", "ביולי", "באוג׳", "בספט׳", "באוק׳",
    "בנוב׳", "בדצמ׳",
];

/// Why the active card has no location chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The alert itself lists no locations.
    NoLocationsInAlert,
    /// Every location was filtered out by the selected region.
    NoLocationsInRegion { hidden: usize },
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::NoLocationsInAlert => write!(f, "אין יישובים בהתרעה"),
            EmptyReason::NoLocationsInRegion { hidden } => {
                write!(f, "אין יישובים מאזור זה ({} ממוסננים)", hidden)
            }
        }
    }
}

/// The active alert card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAlertView {
    pub id: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub is_demo: bool,
    /// Locations in the selected region, in broadcast order.
    pub locations: Vec<String>,
    /// Locations hidden by the region filter.
    pub hidden_count: usize,
}

impl ActiveAlertView {
    /// Build the card for the store's current alert, if there is one.
    pub fn from_store(store: &AlertStore, region: RegionId) -> Option<Self> {
        let filtered = store.filtered_current(region)?;
        let alert = filtered.alert;
        let cat = category(&alert.category);
        Some(Self {
            id: alert.id.clone(),
            icon: cat.icon,
            color: cat.color,
            title: alert.title.clone(),
            description: alert.description().map(str::to_string),
            is_demo: alert.is_synthetic,
            locations: filtered.locations.into_owned(),
            hidden_count: filtered.hidden,
        })
    }

    /// Set when there are no chips to show.
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.locations.is_empty() {
            None
        } else if self.hidden_count > 0 {
            Some(EmptyReason::NoLocationsInRegion {
                hidden: self.hidden_count,
            })
        } else {
            Some(EmptyReason::NoLocationsInAlert)
        }
    }
}

/// Number of current-alert locations shown under `region`.
pub fn active_count(store: &AlertStore, region: RegionId) -> usize {
    store
        .filtered_current(region)
        .map(|f| f.locations.len())
        .unwrap_or(0)
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntryView {
    pub id: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub title: String,
    pub is_demo: bool,
    pub locations_summary: String,
    pub time: String,
}

impl HistoryEntryView {
    pub fn new(alert: &Alert, now: DateTime<Utc>) -> Self {
        let cat = category(&alert.category);
        Self {
            id: alert.id.clone(),
            icon: cat.icon,
            color: cat.color,
            title: alert.title.clone(),
            is_demo: alert.is_synthetic,
            locations_summary: summarize_locations(&alert.locations),
            time: relative_time(alert.timestamp(), now),
        }
    }
}

/// History rows for `region`, newest first as delivered.
pub fn history_entries(
    store: &AlertStore,
    region: RegionId,
    now: DateTime<Utc>,
) -> Vec<HistoryEntryView> {
    store
        .filtered_history(region)
        .into_iter()
        .map(|a| HistoryEntryView::new(a, now))
        .collect()
}

/// First few locations joined, with the remainder collapsed into a count.
pub fn summarize_locations(locations: &[String]) -> String {
    let shown = locations
        .iter()
        .take(HISTORY_LOCATIONS_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("، ");
    match locations.len().checked_sub(HISTORY_LOCATIONS_SHOWN) {
        Some(more) if more > 0 => format!("{} ועוד {}", shown, more),
        _ => shown,
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // The server writes history dates in Israel local time with no offset.
    // On the repeated autumn hour the earlier reading wins.
    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())?;
    Jerusalem
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Human relative time for an ISO-8601 timestamp.
///
/// Empty when the timestamp is absent or unparseable.
pub fn relative_time(iso: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(at) = iso.and_then(parse_timestamp) else {
        return String::new();
    };

    let minutes = (now - at).num_minutes();
    if minutes < 1 {
        "עכשיו".to_string()
    } else if minutes < 60 {
        format!("לפני {} דק'", minutes)
    } else if minutes < 1440 {
        format!("לפני {} ש'", minutes / 60)
    } else {
        let local = at.with_timezone(&Jerusalem);
        format!("{} {}", local.day(), HEBREW_MONTHS[local.month0() as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap()
    }

    fn locs(n: usize) -> Vec<String> {
        ["שדרות", "בארי", "זיקים", "נחל עוז", "ניר עוז", "כרם שלום"]
            .iter()
            .take(n)
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = fixed_now();
        assert_eq!(relative_time(None, now), "");
        assert_eq!(relative_time(Some("garbage"), now), "");
        assert_eq!(relative_time(Some("2024-05-01T12:59:30Z"), now), "עכשיו");
        assert_eq!(relative_time(Some("2024-05-01T12:55:00Z"), now), "לפני 5 דק'");
        assert_eq!(relative_time(Some("2024-05-01T10:00:00+00:00"), now), "לפני 3 ש'");
        assert_eq!(relative_time(Some("2024-04-20T10:00:00Z"), now), "20 באפר׳");
    }

    #[test]
    fn test_relative_time_without_offset_is_israel_local() {
        // 13:00 UTC is 16:00 in Israel summer time.
        let now = fixed_now();
        assert_eq!(relative_time(Some("2024-05-01 15:50:00"), now), "לפני 10 דק'");
        assert_eq!(relative_time(Some("2024-05-01T15:40:00.000"), now), "לפני 20 דק'");
        assert_eq!(relative_time(Some("2024-05-01 12:50:00"), now), "לפני 3 ש'");
    }

    #[test]
    fn test_server_history_date_format() {
        // Received at 12:00 IDT (09:00 UTC), viewed five minutes later.
        let viewed = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap();
        assert_eq!(relative_time(Some("2024-05-01 12:00:00"), viewed), "לפני 5 דק'");

        let later = Utc.with_ymd_and_hms(2024, 5, 1, 11, 30, 0).unwrap();
        assert_eq!(relative_time(Some("2024-05-01 12:00:00"), later), "לפני 2 ש'");

        // Winter offset is two hours.
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(relative_time(Some("2024-01-15 12:00:00"), winter), "לפני 30 דק'");
    }

    #[test]
    fn test_date_shown_in_israel_calendar() {
        // 23:30 UTC on 19 April is already 20 April in Israel.
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap();
        assert_eq!(relative_time(Some("2024-04-19T23:30:00Z"), now), "20 באפר׳");
    }

    #[test]
    fn test_future_timestamp_reads_as_now() {
        assert_eq!(relative_time(Some("2024-05-01T13:10:00Z"), fixed_now()), "עכשיו");
    }

    #[test]
    fn test_summarize_locations() {
        assert_eq!(summarize_locations(&[]), "");
        assert_eq!(summarize_locations(&locs(2)), "שדרות، בארי");
        assert_eq!(summarize_locations(&locs(4)), "שדרות، בארי، זיקים، נחל עוז");
        assert_eq!(
            summarize_locations(&locs(6)),
            "שדרות، בארי، זיקים، נחל עוז ועוד 2"
        );
    }

    #[test]
    fn test_active_view_region_filtering() {
        let mut store = AlertStore::new();
        store.set_current(Some(Alert::new("1", "1", "ירי רקטות", ["עזה", "אשקלון"])));

        let all = ActiveAlertView::from_store(&store, RegionId::All).unwrap();
        assert_eq!(all.locations.len(), 2);
        assert_eq!(all.empty_reason(), None);
        assert_eq!(all.icon, "🚀");

        let north = ActiveAlertView::from_store(&store, RegionId::North).unwrap();
        assert_eq!(
            north.empty_reason(),
            Some(EmptyReason::NoLocationsInRegion { hidden: 2 })
        );
        assert_eq!(active_count(&store, RegionId::North), 0);
        assert_eq!(active_count(&store, RegionId::South), 1);
    }

    #[test]
    fn test_active_view_without_locations() {
        let mut store = AlertStore::new();
        assert!(ActiveAlertView::from_store(&store, RegionId::All).is_none());
        assert_eq!(active_count(&store, RegionId::All), 0);

        store.set_current(Some(Alert::new("1", "99", "בדיקה", Vec::<String>::new())));
        let view = ActiveAlertView::from_store(&store, RegionId::South).unwrap();
        assert_eq!(view.empty_reason(), Some(EmptyReason::NoLocationsInAlert));
        assert_eq!(view.icon, "⚠️");
    }

    #[test]
    fn test_history_entries() {
        let mut store = AlertStore::new();
        let mut old = Alert::new("1", "1", "ירי רקטות", locs(6));
        old.occurred_at = Some("2024-05-01T12:30:00Z".to_string());
        let demo = Alert::new("2", "6", "כטב״מ", ["חיפה"]).synthetic();
        store.set_history(vec![old, demo]);

        let rows = history_entries(&store, RegionId::All, fixed_now());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time, "לפני 30 דק'");
        assert!(rows[0].locations_summary.ends_with("ועוד 2"));
        assert!(rows[1].is_demo);
        assert_eq!(rows[1].time, "");

        let otef = history_entries(&store, RegionId::Otef, fixed_now());
        assert_eq!(otef.len(), 1);
        assert_eq!(otef[0].id, "1");
    }

    #[test]
    fn test_empty_reason_text() {
        assert_eq!(EmptyReason::NoLocationsInAlert.to_string(), "אין יישובים בהתרעה");
        assert_eq!(
            EmptyReason::NoLocationsInRegion { hidden: 3 }.to_string(),
            "אין יישובים מאזור זה (3 ממוסננים)"
        );
    }
}
