//! Static geocoding table for alert locations.

use std::collections::HashMap;
use std::sync::OnceLock;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both axes differ by less than `epsilon` degrees.
    pub fn approx_eq(&self, other: &LatLng, epsilon: f64) -> bool {
        (self.lat - other.lat).abs() < epsilon && (self.lng - other.lng).abs() < epsilon
    }
}

static LOCATIONS: &[(&str, LatLng)] = &[
    // North
    ("קריית שמונה", LatLng::new(33.2073, 35.5702)),
    ("מטולה", LatLng::new(33.2799, 35.5783)),
    ("נהריה", LatLng::new(33.0058, 35.0981)),
    ("שלומי", LatLng::new(33.0758, 35.1444)),
    ("מעלות תרשיחא", LatLng::new(33.0167, 35.2717)),
    ("צפת", LatLng::new(32.9646, 35.4960)),
    ("כרמיאל", LatLng::new(32.9190, 35.2951)),
    ("טבריה", LatLng::new(32.7922, 35.5312)),
    // Haifa bay
    ("חיפה", LatLng::new(32.7940, 34.9896)),
    ("קריית אתא", LatLng::new(32.8110, 35.1050)),
    ("קריית ביאליק", LatLng::new(32.8275, 35.0861)),
    ("קריית מוצקין", LatLng::new(32.8383, 35.0775)),
    ("עכו", LatLng::new(32.9281, 35.0820)),
    ("נשר", LatLng::new(32.7667, 35.0442)),
    // Valleys
    ("עפולה", LatLng::new(32.6078, 35.2897)),
    ("בית שאן", LatLng::new(32.4973, 35.4969)),
    ("נצרת", LatLng::new(32.6996, 35.3035)),
    ("מגדל העמק", LatLng::new(32.6758, 35.2394)),
    ("יקנעם עילית", LatLng::new(32.6594, 35.1100)),
    // Sharon
    ("נתניה", LatLng::new(32.3215, 34.8532)),
    ("חדרה", LatLng::new(32.4340, 34.9196)),
    ("כפר סבא", LatLng::new(32.1750, 34.9070)),
    ("רעננה", LatLng::new(32.1848, 34.8713)),
    ("הרצליה", LatLng::new(32.1663, 34.8436)),
    ("הוד השרון", LatLng::new(32.1500, 34.8880)),
    // Gush Dan
    ("תל אביב - יפו", LatLng::new(32.0853, 34.7818)),
    ("רמת גן", LatLng::new(32.0684, 34.8248)),
    ("גבעתיים", LatLng::new(32.0722, 34.8089)),
    ("בני ברק", LatLng::new(32.0807, 34.8338)),
    ("חולון", LatLng::new(32.0158, 34.7874)),
    ("בת ים", LatLng::new(32.0171, 34.7454)),
    ("פתח תקווה", LatLng::new(32.0840, 34.8878)),
    // Center
    ("ראשון לציון", LatLng::new(31.9730, 34.7925)),
    ("רחובות", LatLng::new(31.8948, 34.8113)),
    ("נס ציונה", LatLng::new(31.9293, 34.7987)),
    ("לוד", LatLng::new(31.9510, 34.8881)),
    ("רמלה", LatLng::new(31.9279, 34.8625)),
    ("מודיעין", LatLng::new(31.8980, 35.0104)),
    // Jerusalem
    ("ירושלים", LatLng::new(31.7683, 35.2137)),
    ("בית שמש", LatLng::new(31.7470, 34.9881)),
    ("מעלה אדומים", LatLng::new(31.7770, 35.2980)),
    ("מבשרת ציון", LatLng::new(31.8020, 35.1500)),
    // South
    ("אשדוד", LatLng::new(31.8014, 34.6435)),
    ("אשקלון", LatLng::new(31.6688, 34.5743)),
    ("קריית גת", LatLng::new(31.6100, 34.7642)),
    ("באר שבע", LatLng::new(31.2520, 34.7915)),
    ("נתיבות", LatLng::new(31.4230, 34.5890)),
    ("אופקים", LatLng::new(31.3140, 34.6200)),
    ("דימונה", LatLng::new(31.0690, 35.0330)),
    ("אילת", LatLng::new(29.5577, 34.9519)),
    // Gaza envelope
    ("שדרות", LatLng::new(31.5250, 34.5969)),
    ("זיקים", LatLng::new(31.6090, 34.5170)),
    ("כפר עזה", LatLng::new(31.4830, 34.5330)),
    ("נחל עוז", LatLng::new(31.4730, 34.4980)),
    ("בארי", LatLng::new(31.4240, 34.4930)),
    ("ניר עוז", LatLng::new(31.3110, 34.4000)),
    ("כרם שלום", LatLng::new(31.2290, 34.2840)),
];

fn index() -> &'static HashMap<&'static str, LatLng> {
    static INDEX: OnceLock<HashMap<&'static str, LatLng>> = OnceLock::new();
    INDEX.get_or_init(|| LOCATIONS.iter().copied().collect())
}

/// Look up the coordinate of a location name.
pub fn coordinates(name: &str) -> Option<LatLng> {
    index().get(name.trim()).copied()
}

/// All location names with a known coordinate, in table order.
pub fn known_locations() -> impl Iterator<Item = &'static str> {
    LOCATIONS.iter().map(|(name, _)| *name)
}
