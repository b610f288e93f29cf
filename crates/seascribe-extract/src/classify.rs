//! Fact Classifier — recursive per-location grouping of document facts.

use serde_json::{Map, Value};

use crate::keywords::{categorize, matches_any, FactCategory, WAVE_KEYWORDS, WEATHER_KEYWORDS};
use crate::{LocationRecord, MaritimeDataset};

/// Walk an arbitrary nested document and group scalar string facts into
/// per-location records by keyword matching on field names.
///
/// Records are returned in document traversal order (depth-first, pre-order
/// per branch). A record is emitted for a mapping node only when the node
/// carries both a location name and at least one weather or wave fact; its
/// facts are never re-emitted by ancestor nodes.
pub fn classify(document: &Value) -> MaritimeDataset {
    MaritimeDataset {
        locations: classify_node(document),
    }
}

fn classify_node(value: &Value) -> Vec<LocationRecord> {
    match value {
        Value::Object(map) => classify_object(map),
        Value::Array(items) => items.iter().flat_map(classify_node).collect(),
        _ => Vec::new(),
    }
}

fn classify_object(map: &Map<String, Value>) -> Vec<LocationRecord> {
    let mut records = Vec::new();
    let mut location_name: Option<String> = None;
    let mut weather: Vec<String> = Vec::new();
    let mut waves: Vec<String> = Vec::new();

    for (key, value) in map {
        match value {
            Value::String(s) if !s.trim().is_empty() => match categorize(key) {
                // Later waypoint matches at the same node overwrite earlier ones.
                Some(FactCategory::Waypoint) => location_name = Some(s.trim().to_string()),
                Some(FactCategory::Weather) => weather.push(format!("{}: {}", key, s.trim())),
                Some(FactCategory::Wave) => waves.push(format!("{}: {}", key, s.trim())),
                None => {}
            },
            Value::Object(nested) => {
                let key_lower = key.to_lowercase();
                if matches_any(&key_lower, WEATHER_KEYWORDS) {
                    // A weather sub-mapping contributes its scalar children,
                    // keyed by the child's own field name.
                    collect_scalar_children(nested, &mut weather);
                } else if matches_any(&key_lower, WAVE_KEYWORDS) {
                    collect_scalar_children(nested, &mut waves);
                } else {
                    records.extend(classify_object(nested));
                }
            }
            Value::Array(items) => {
                for item in items {
                    records.extend(classify_node(item));
                }
            }
            _ => {}
        }
    }

    if let Some(name) = location_name {
        if !weather.is_empty() || !waves.is_empty() {
            records.push(LocationRecord {
                name,
                weather,
                waves,
            });
        }
    }

    records
}

/// Flatten one level: pull every non-empty scalar string child of a
/// weather/wave sub-mapping into the given fact list.
fn collect_scalar_children(map: &Map<String, Value>, facts: &mut Vec<String>) {
    for (key, value) in map {
        if let Value::String(s) = value {
            if !s.trim().is_empty() {
                facts.push(format!("{}: {}", key, s.trim()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_groups_facts_per_location() {
        let document = json!({
            "route": [
                {
                    "waypoint": "Georges Bank",
                    "wind": "15 knots NE",
                    "wave_height": "4 feet",
                },
                {
                    "waypoint": "Stellwagen Bank",
                    "forecast": "clearing",
                },
            ],
        });

        let dataset = classify(&document);
        assert_eq!(dataset.locations.len(), 2);
        assert_eq!(dataset.locations[0].name, "Georges Bank");
        assert_eq!(dataset.locations[0].weather, vec!["wind: 15 knots NE"]);
        assert_eq!(dataset.locations[0].waves, vec!["wave_height: 4 feet"]);
        assert_eq!(dataset.locations[1].name, "Stellwagen Bank");
        assert_eq!(dataset.locations[1].weather, vec!["forecast: clearing"]);
        assert!(dataset.locations[1].waves.is_empty());
    }

    #[test]
    fn test_weather_submapping_flattened_with_child_keys() {
        let document = json!({
            "harbor": "Provincetown",
            "weather": {
                "wind": "10 knots",
                "sky": "overcast",
            },
            "sea_state": {
                "swell": "2 feet",
            },
        });

        let dataset = classify(&document);
        assert_eq!(dataset.locations.len(), 1);
        let record = &dataset.locations[0];
        assert_eq!(record.name, "Provincetown");
        // Every scalar child of the sub-mapping is pulled, keyed by the
        // child's field name, not the parent's.
        assert_eq!(record.weather, vec!["wind: 10 knots", "sky: overcast"]);
        assert_eq!(record.waves, vec!["swell: 2 feet"]);
    }

    #[test]
    fn test_name_without_facts_emits_nothing() {
        let document = json!({"destination": "Nantucket"});
        assert!(classify(&document).is_empty());
    }

    #[test]
    fn test_facts_without_name_emit_nothing() {
        let document = json!({"wind": "5 knots", "swell": "1 foot"});
        assert!(classify(&document).is_empty());
    }

    #[test]
    fn test_inner_record_not_reemitted_by_ancestor() {
        let document = json!({
            "location": "Outer Label",
            "stations": {
                "buoy": "Buoy 44013",
                "wave_height": "6 feet",
            },
        });

        // The outer node has a name but no facts of its own (the inner
        // node's facts were consumed by the inner record), so only the
        // inner record survives.
        let dataset = classify(&document);
        assert_eq!(dataset.locations.len(), 1);
        assert_eq!(dataset.locations[0].name, "Buoy 44013");
    }

    #[test]
    fn test_later_waypoint_key_overwrites_earlier() {
        let document = json!({
            "name": "First",
            "port": "Second",
            "wind": "calm",
        });

        let dataset = classify(&document);
        assert_eq!(dataset.locations.len(), 1);
        // Document key order is preserved; the later match wins.
        assert_eq!(dataset.locations[0].name, "Second");
    }

    #[test]
    fn test_non_string_scalars_are_ignored() {
        let document = json!({
            "waypoint": "Race Point",
            "wind_speed": 12,
            "tide_rising": true,
            "humidity": "80%",
        });

        let dataset = classify(&document);
        assert_eq!(dataset.locations.len(), 1);
        assert_eq!(dataset.locations[0].weather, vec!["humidity: 80%"]);
        assert!(dataset.locations[0].waves.is_empty());
    }

    #[test]
    fn test_empty_string_values_are_ignored() {
        let document = json!({
            "waypoint": "Wood End",
            "wind": "   ",
            "swell": "3 feet",
        });

        let dataset = classify(&document);
        assert_eq!(dataset.locations.len(), 1);
        assert!(dataset.locations[0].weather.is_empty());
        assert_eq!(dataset.locations[0].waves, vec!["swell: 3 feet"]);
    }

    #[test]
    fn test_top_level_array_is_iterated() {
        let document = json!([
            {"buoy": "A", "wind": "light"},
            {"buoy": "B", "swell": "heavy"},
        ]);

        let dataset = classify(&document);
        assert_eq!(dataset.locations.len(), 2);
        assert_eq!(dataset.locations[0].name, "A");
        assert_eq!(dataset.locations[1].name, "B");
    }

    #[test]
    fn test_value_whitespace_is_trimmed() {
        let document = json!({"port": "  Gloucester  ", "wind": "  fresh breeze  "});
        let dataset = classify(&document);
        assert_eq!(dataset.locations[0].name, "Gloucester");
        assert_eq!(dataset.locations[0].weather, vec!["wind: fresh breeze"]);
    }
}
