//! Narrative Segmenter — splits the generation reply back into one
//! narrative per detected location.

use seascribe_extract::LocationRecord;
use serde::{Deserialize, Serialize};

/// One location's narrative text plus the condition facts attached by the
/// assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRecord {
    pub location: String,
    pub narrative: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waves: Option<Vec<String>>,
}

impl NarrativeRecord {
    fn new(location: String, narrative: String) -> Self {
        Self {
            location,
            narrative,
            weather: None,
            waves: None,
        }
    }
}

/// Split a reply into per-location narratives.
///
/// Primary pass: a line-oriented state machine. Each non-blank line is
/// searched for the first location name (in list order) occurring as a
/// case-insensitive substring; such a line starts a new section and flushes
/// the previous one. Text before the first recognized heading is dropped.
/// Location names that are substrings of one another are not disambiguated;
/// the first match in list order wins.
///
/// If the primary pass emits nothing and `locations` is non-empty, the reply
/// is split on `.` into equal contiguous sentence chunks, one per location,
/// dropping any remainder sentences.
///
/// At most one record per location is produced per section; a location with
/// no matched text yields no record.
pub fn segment(reply: &str, locations: &[LocationRecord]) -> Vec<NarrativeRecord> {
    let mut narratives: Vec<NarrativeRecord> = Vec::new();
    let mut current_location: Option<&str> = None;
    let mut buffer: Vec<String> = Vec::new();

    for raw_line in reply.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let line_lower = line.to_lowercase();
        let matched = locations
            .iter()
            .find(|loc| line_lower.contains(&loc.name.to_lowercase()))
            .map(|loc| loc.name.as_str());

        match matched {
            Some(name) => {
                if let Some(previous) = current_location {
                    if !buffer.is_empty() {
                        narratives
                            .push(NarrativeRecord::new(previous.to_string(), buffer.join(" ")));
                    }
                }
                current_location = Some(name);
                buffer.clear();

                let cleaned = clean_heading_line(line, name);
                if !cleaned.is_empty() {
                    buffer.push(cleaned);
                }
            }
            None => {
                if current_location.is_some() {
                    buffer.push(line.to_string());
                }
            }
        }
    }

    if let Some(previous) = current_location {
        if !buffer.is_empty() {
            narratives.push(NarrativeRecord::new(previous.to_string(), buffer.join(" ")));
        }
    }

    if narratives.is_empty() && !locations.is_empty() {
        narratives = split_evenly(reply, locations);
    }

    narratives
}

/// Clean a heading line: drop bold markers and a leading location name with
/// its trailing colon/dash punctuation.
fn clean_heading_line(line: &str, location_name: &str) -> String {
    let line = line.replace("**", "");
    let cleaned = strip_name_prefix(&line, location_name).unwrap_or(line);
    cleaned.trim().to_string()
}

/// If the line starts with the location name (case-insensitive), remove the
/// name and any colon/dash/whitespace that follows it.
fn strip_name_prefix(line: &str, name: &str) -> Option<String> {
    if !line.to_lowercase().starts_with(&name.to_lowercase()) {
        return None;
    }
    let rest: String = line.chars().skip(name.chars().count()).collect();
    Some(
        rest.trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
            .to_string(),
    )
}

/// Fallback: divide the reply's sentences into equal contiguous chunks,
/// one per location. Remainder sentences past the last full chunk are
/// dropped, not redistributed.
fn split_evenly(reply: &str, locations: &[LocationRecord]) -> Vec<NarrativeRecord> {
    let sentences: Vec<&str> = reply.split('.').collect();
    let per_location = std::cmp::max(1, sentences.len() / locations.len());

    let mut narratives = Vec::new();

    for (i, location) in locations.iter().enumerate() {
        let start = i * per_location;
        if start >= sentences.len() {
            continue;
        }
        let end = usize::min(start + per_location, sentences.len());

        let mut narrative = sentences[start..end].join(".").trim().to_string();
        narrative = narrative.replace("**", "");

        for loc in locations {
            if let Some(stripped) = strip_name_prefix(&narrative, &loc.name) {
                narrative = stripped;
                break;
            }
        }

        let narrative = narrative.trim();
        if narrative.is_empty() {
            continue;
        }

        let narrative = if narrative.ends_with('.') {
            narrative.to_string()
        } else {
            format!("{}.", narrative)
        };

        narratives.push(NarrativeRecord::new(location.name.clone(), narrative));
    }

    narratives
}
