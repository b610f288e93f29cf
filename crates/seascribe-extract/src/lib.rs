//! Seascribe Extract — heuristic mining of location, weather, and wave facts
//! from arbitrarily-shaped JSON documents.
//!
//! No schema is assumed: field names are matched against fixed keyword sets
//! at any nesting depth, and scalar string values are grouped into
//! per-location buckets. This is a best-effort keyword heuristic, not a
//! semantic parser.

pub mod classify;
pub mod flatten;
pub mod keywords;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One detected location with its grouped condition facts.
///
/// `name` is trimmed and non-empty. Weather and wave facts are
/// `"key: value"` strings in document traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub weather: Vec<String>,
    pub waves: Vec<String>,
}

/// Ordered collection of [`LocationRecord`]s for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaritimeDataset {
    pub locations: Vec<LocationRecord>,
}

impl MaritimeDataset {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Extract a maritime dataset from a document: per-location grouping first,
/// then the flat shared-bucket fallback when no grouped location is found.
///
/// Never fails; an untraversable or keyword-free document yields an empty
/// dataset.
pub fn extract_maritime_data(document: &Value) -> MaritimeDataset {
    let dataset = classify::classify(document);
    if dataset.is_empty() {
        debug!("No grouped locations found, falling back to flat extraction");
        flatten::flatten(document)
    } else {
        dataset
    }
}
