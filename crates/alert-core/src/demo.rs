//! Canned alerts replayed in demo mode.

use std::sync::OnceLock;

use crate::alert::Alert;

/// The fixed demo list, each entry flagged synthetic.
///
/// The list is never empty.
pub fn catalog() -> &'static [Alert] {
    static CATALOG: OnceLock<Vec<Alert>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            Alert::new(
                "demo-1",
                "1",
                "ירי רקטות וטילים",
                ["שדרות", "נתיבות", "כפר עזה", "נחל עוז", "אשקלון"],
            )
            .with_description("היכנסו למרחב המוגן ושהו בו 10 דקות")
            .synthetic(),
            Alert::new(
                "demo-2",
                "1",
                "ירי רקטות וטילים",
                ["תל אביב - יפו", "רמת גן", "גבעתיים", "בני ברק", "חולון", "בת ים"],
            )
            .with_description("היכנסו למרחב המוגן ושהו בו 10 דקות")
            .synthetic(),
            Alert::new(
                "demo-3",
                "6",
                "חדירת כלי טיס עוין",
                ["קריית שמונה", "מטולה", "צפת", "נהריה"],
            )
            .with_description("היכנסו למרחב המוגן ושהו בו 10 דקות")
            .synthetic(),
            Alert::new("demo-4", "13", "חדירת מחבלים", ["זיקים", "כרם שלום", "בארי"])
                .with_description("היכנסו מיד למבנה, נעלו את הדלתות והחלונות")
                .synthetic(),
            Alert::new(
                "demo-5",
                "1",
                "ירי רקטות וטילים",
                ["חיפה", "קריית אתא", "קריית ביאליק", "עכו", "עפולה"],
            )
            .synthetic(),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::coordinates;

    #[test]
    fn test_catalog_is_synthetic_and_nonempty() {
        let alerts = catalog();
        assert!(!alerts.is_empty());
        assert!(alerts.iter().all(|a| a.is_synthetic));
    }

    #[test]
    fn test_catalog_ids_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for a in catalog() {
            assert!(seen.insert(a.id.as_str()), "duplicate demo id '{}'", a.id);
        }
    }

    #[test]
    fn test_catalog_locations_are_mappable() {
        for a in catalog() {
            for l in &a.locations {
                assert!(coordinates(l).is_some(), "demo location '{}' has no coordinates", l);
            }
        }
    }
}
