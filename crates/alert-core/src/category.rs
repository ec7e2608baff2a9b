//! Display styles for alert category codes.

/// Display style for one alert category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Wire code, e.g. `"1"`.
    pub code: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    /// Marker and card accent colour.
    pub color: &'static str,
    pub chip_bg: &'static str,
    pub chip_text: &'static str,
    pub chip_border: &'static str,
}

/// Style used for any code missing from the table.
pub static DEFAULT_CATEGORY: Category = Category {
    code: "",
    icon: "⚠️",
    label: "התרעה",
    color: "#e65100",
    chip_bg: "#fff3e0",
    chip_text: "#e65100",
    chip_border: "#ffcc80",
};

static CATEGORIES: &[Category] = &[
    Category {
        code: "1",
        icon: "🚀",
        label: "ירי רקטות וטילים",
        color: "#d32f2f",
        chip_bg: "#ffebee",
        chip_text: "#c62828",
        chip_border: "#ef9a9a",
    },
    Category {
        code: "3",
        icon: "🌍",
        label: "רעידת אדמה",
        color: "#6d4c41",
        chip_bg: "#efebe9",
        chip_text: "#4e342e",
        chip_border: "#bcaaa4",
    },
    Category {
        code: "4",
        icon: "☢️",
        label: "אירוע רדיולוגי",
        color: "#f9a825",
        chip_bg: "#fffde7",
        chip_text: "#f57f17",
        chip_border: "#fff59d",
    },
    Category {
        code: "5",
        icon: "🌊",
        label: "צונאמי",
        color: "#0277bd",
        chip_bg: "#e1f5fe",
        chip_text: "#01579b",
        chip_border: "#81d4fa",
    },
    Category {
        code: "6",
        icon: "✈️",
        label: "חדירת כלי טיס עוין",
        color: "#7b1fa2",
        chip_bg: "#f3e5f5",
        chip_text: "#6a1b9a",
        chip_border: "#ce93d8",
    },
    Category {
        code: "7",
        icon: "☣️",
        label: "אירוע חומרים מסוכנים",
        color: "#558b2f",
        chip_bg: "#f1f8e9",
        chip_text: "#33691e",
        chip_border: "#c5e1a5",
    },
    Category {
        code: "13",
        icon: "🔫",
        label: "חדירת מחבלים",
        color: "#212121",
        chip_bg: "#eeeeee",
        chip_text: "#212121",
        chip_border: "#9e9e9e",
    },
];

/// Look up the style for a category code, falling back to [`DEFAULT_CATEGORY`].
pub fn category(code: &str) -> &'static Category {
    let code = code.trim();
    CATEGORIES
        .iter()
        .find(|c| c.code == code)
        .unwrap_or(&DEFAULT_CATEGORY)
}
