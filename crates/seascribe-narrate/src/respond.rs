//! Response Assembler — merges narratives with extracted facts into the
//! terminal success/error envelope.

use chrono::Utc;
use seascribe_extract::MaritimeDataset;
use serde::{Deserialize, Serialize};

use crate::segment::NarrativeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The terminal artifact returned to the caller. Created fresh per request
/// and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub narratives: Vec<NarrativeRecord>,
    pub model: String,
    /// RFC 3339 generation timestamp.
    pub timestamp: String,
    pub locations_count: usize,
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// Assemble a success envelope. When a dataset is given, each narrative
    /// is enriched with the weather/wave facts of the first location record
    /// whose name matches exactly (non-empty sequences only).
    pub fn success(
        mut narratives: Vec<NarrativeRecord>,
        model: &str,
        dataset: Option<&MaritimeDataset>,
    ) -> Self {
        if let Some(dataset) = dataset {
            for narrative in &mut narratives {
                if let Some(location) = dataset
                    .locations
                    .iter()
                    .find(|loc| loc.name == narrative.location)
                {
                    if !location.weather.is_empty() {
                        narrative.weather = Some(location.weather.clone());
                    }
                    if !location.waves.is_empty() {
                        narrative.waves = Some(location.waves.clone());
                    }
                }
            }
        }

        let locations_count = narratives.len();
        Self {
            narratives,
            model: model.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            locations_count,
            status: ResponseStatus::Success,
            error: None,
        }
    }

    /// Assemble an error envelope: empty narratives by construction, the
    /// failure message verbatim, and a zero location count. Callers always
    /// receive this well-formed shape, never a raw error.
    pub fn error(model: &str, message: impl Into<String>) -> Self {
        Self {
            narratives: Vec::new(),
            model: model.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            locations_count: 0,
            status: ResponseStatus::Error,
            error: Some(message.into()),
        }
    }
}
