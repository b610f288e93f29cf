//! Fallback Flattener — single-pass flat extraction with shared condition
//! buckets, used when the classifier finds no grouped location.

use serde_json::Value;

use crate::keywords::{categorize, FactCategory};
use crate::{LocationRecord, MaritimeDataset};

/// Flatten the whole document into shared fact buckets.
///
/// Field paths are matched as dotted full paths (so a parent key like
/// `conditions` makes every scalar string under it a weather fact). One
/// record is emitted per discovered waypoint name; every record shares the
/// entire weather and wave sequences. Intended for documents describing a
/// single sea state across several named waypoints.
pub fn flatten(document: &Value) -> MaritimeDataset {
    let mut waypoints: Vec<String> = Vec::new();
    let mut weather: Vec<String> = Vec::new();
    let mut waves: Vec<String> = Vec::new();

    walk(document, "", &mut waypoints, &mut weather, &mut waves);

    let locations = waypoints
        .into_iter()
        .map(|name| LocationRecord {
            name,
            weather: weather.clone(),
            waves: waves.clone(),
        })
        .collect();

    MaritimeDataset { locations }
}

fn walk(
    value: &Value,
    path: &str,
    waypoints: &mut Vec<String>,
    weather: &mut Vec<String>,
    waves: &mut Vec<String>,
) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let full_key = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };

                match child {
                    Value::String(s) if !s.trim().is_empty() => match categorize(&full_key) {
                        Some(FactCategory::Waypoint) => waypoints.push(s.trim().to_string()),
                        // Facts keep the leaf key, not the full path.
                        Some(FactCategory::Weather) => {
                            weather.push(format!("{}: {}", key, s.trim()))
                        }
                        Some(FactCategory::Wave) => waves.push(format!("{}: {}", key, s.trim())),
                        None => {}
                    },
                    _ => walk(child, &full_key, waypoints, weather, waves),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, path, waypoints, weather, waves);
            }
        }
        _ => {}
    }
}
