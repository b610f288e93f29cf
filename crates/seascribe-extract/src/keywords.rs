//! Keyword tables and category dispatch for field-name classification.

/// Field names that identify a location.
pub const WAYPOINT_KEYWORDS: &[&str] = &[
    "waypoint",
    "buoy",
    "destination",
    "port",
    "harbor",
    "location",
    "place",
    "name",
    "point",
];

/// Field names that identify weather conditions.
pub const WEATHER_KEYWORDS: &[&str] = &[
    "weather",
    "wind",
    "temperature",
    "temp",
    "pressure",
    "humidity",
    "visibility",
    "condition",
    "forecast",
];

/// Field names that identify wave and sea-state conditions.
pub const WAVE_KEYWORDS: &[&str] = &[
    "wave", "swell", "height", "period", "direction", "sea", "surf", "tide", "current",
];

/// Fact categories, in match precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactCategory {
    Waypoint,
    Weather,
    Wave,
}

const DISPATCH: &[(FactCategory, &[&str])] = &[
    (FactCategory::Waypoint, WAYPOINT_KEYWORDS),
    (FactCategory::Weather, WEATHER_KEYWORDS),
    (FactCategory::Wave, WAVE_KEYWORDS),
];

/// Classify a field name (or dotted field path): first category whose set
/// contains a substring of the lower-cased key wins. A key matching several
/// sets is classified by the earliest category in precedence order.
pub fn categorize(key: &str) -> Option<FactCategory> {
    let key = key.to_lowercase();
    DISPATCH
        .iter()
        .find(|(_, keywords)| matches_any(&key, keywords))
        .map(|(category, _)| *category)
}

/// True if any keyword is a substring of the already lower-cased key.
pub fn matches_any(key_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| key_lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_basic() {
        assert_eq!(categorize("waypoint"), Some(FactCategory::Waypoint));
        assert_eq!(categorize("wind_speed"), Some(FactCategory::Weather));
        assert_eq!(categorize("wave_height"), Some(FactCategory::Wave));
        assert_eq!(categorize("unrelated"), None);
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(categorize("Wind_Speed"), Some(FactCategory::Weather));
        assert_eq!(categorize("HARBOR"), Some(FactCategory::Waypoint));
    }

    #[test]
    fn test_precedence_waypoint_over_wave() {
        // "sea_port" contains both "sea" (wave) and "port" (waypoint);
        // waypoint is tested first.
        assert_eq!(categorize("sea_port"), Some(FactCategory::Waypoint));
    }

    #[test]
    fn test_precedence_weather_over_wave() {
        // "current_conditions" contains "current" (wave) and "condition"
        // (weather); weather wins.
        assert_eq!(categorize("current_conditions"), Some(FactCategory::Weather));
    }
}
