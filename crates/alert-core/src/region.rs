//! Display regions and location membership.
//!
//! Regions are a static grouping of location names used only to filter what
//! is shown. The named regions are disjoint; [`RegionId::All`] matches every
//! location, including ones that belong to no named region.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Identifier of a display region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionId {
    #[default]
    All,
    North,
    Haifa,
    Valleys,
    Sharon,
    GushDan,
    Center,
    Jerusalem,
    South,
    Otef,
}

impl RegionId {
    /// Every region, wildcard first.
    pub const ALL: [RegionId; 10] = [
        RegionId::All,
        RegionId::North,
        RegionId::Haifa,
        RegionId::Valleys,
        RegionId::Sharon,
        RegionId::GushDan,
        RegionId::Center,
        RegionId::Jerusalem,
        RegionId::South,
        RegionId::Otef,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionId::All => "all",
            RegionId::North => "north",
            RegionId::Haifa => "haifa",
            RegionId::Valleys => "valleys",
            RegionId::Sharon => "sharon",
            RegionId::GushDan => "gush-dan",
            RegionId::Center => "center",
            RegionId::Jerusalem => "jerusalem",
            RegionId::South => "south",
            RegionId::Otef => "otef",
        }
    }

    /// The static definition of this region.
    pub fn region(&self) -> &'static Region {
        REGIONS
            .iter()
            .find(|r| r.id == *self)
            .unwrap_or(&REGIONS[0])
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no region.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region '{0}'")]
pub struct UnknownRegion(pub String);

impl FromStr for RegionId {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RegionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// A named group of locations.
#[derive(Debug)]
pub struct Region {
    pub id: RegionId,
    pub label: &'static str,
    /// Member location names. Empty for the wildcard.
    pub cities: &'static [&'static str],
}

impl Region {
    /// True if `location` is shown under this region.
    pub fn contains(&self, location: &str) -> bool {
        self.id == RegionId::All || region_of(location) == Some(self.id)
    }
}

/// All regions, wildcard first.
pub static REGIONS: &[Region] = &[
    Region {
        id: RegionId::All,
        label: "כל הארץ",
        cities: &[],
    },
    Region {
        id: RegionId::North,
        label: "צפון",
        cities: &[
            "קריית שמונה",
            "מטולה",
            "נהריה",
            "שלומי",
            "מעלות תרשיחא",
            "צפת",
            "כרמיאל",
            "טבריה",
        ],
    },
    Region {
        id: RegionId::Haifa,
        label: "חיפה והקריות",
        cities: &["חיפה", "קריית אתא", "קריית ביאליק", "קריית מוצקין", "עכו", "נשר"],
    },
    Region {
        id: RegionId::Valleys,
        label: "העמקים",
        cities: &["עפולה", "בית שאן", "נצרת", "מגדל העמק", "יקנעם עילית"],
    },
    Region {
        id: RegionId::Sharon,
        label: "השרון",
        cities: &["נתניה", "חדרה", "כפר סבא", "רעננה", "הרצליה", "הוד השרון"],
    },
    Region {
        id: RegionId::GushDan,
        label: "גוש דן",
        cities: &[
            "תל אביב - יפו",
            "רמת גן",
            "גבעתיים",
            "בני ברק",
            "חולון",
            "בת ים",
            "פתח תקווה",
        ],
    },
    Region {
        id: RegionId::Center,
        label: "מרכז",
        cities: &["ראשון לציון", "רחובות", "נס ציונה", "לוד", "רמלה", "מודיעין"],
    },
    Region {
        id: RegionId::Jerusalem,
        label: "ירושלים",
        cities: &["ירושלים", "בית שמש", "מעלה אדומים", "מבשרת ציון"],
    },
    Region {
        id: RegionId::South,
        label: "דרום",
        cities: &[
            "אשדוד",
            "אשקלון",
            "קריית גת",
            "באר שבע",
            "נתיבות",
            "אופקים",
            "דימונה",
            "אילת",
        ],
    },
    Region {
        id: RegionId::Otef,
        label: "עוטף עזה",
        cities: &["שדרות", "זיקים", "כפר עזה", "נחל עוז", "בארי", "ניר עוז", "כרם שלום"],
    },
];

fn membership() -> &'static HashMap<&'static str, RegionId> {
    static INDEX: OnceLock<HashMap<&'static str, RegionId>> = OnceLock::new();
    INDEX.get_or_init(|| {
        REGIONS
            .iter()
            .flat_map(|r| r.cities.iter().map(move |c| (*c, r.id)))
            .collect()
    })
}

/// The named region a location belongs to, if any.
pub fn region_of(location: &str) -> Option<RegionId> {
    membership().get(location.trim()).copied()
}

/// True if `region` is the wildcard or at least one location falls in it.
pub fn matches<S: AsRef<str>>(locations: &[S], region: RegionId) -> bool {
    region == RegionId::All
        || locations
            .iter()
            .any(|l| region_of(l.as_ref()) == Some(region))
}

/// The locations shown under `region`, in broadcast order.
///
/// The wildcard borrows the input unchanged.
pub fn filter_locations(locations: &[String], region: RegionId) -> Cow<'_, [String]> {
    if region == RegionId::All {
        return Cow::Borrowed(locations);
    }
    Cow::Owned(
        locations
            .iter()
            .filter(|l| region_of(l) == Some(region))
            .cloned()
            .collect(),
    )
}
