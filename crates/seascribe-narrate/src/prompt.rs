//! Prompt Composer — serializes a dataset into one linear text prompt.

use seascribe_extract::MaritimeDataset;

/// Compose the generation prompt: the prefix (verbatim, if non-empty)
/// followed by one `LOCATION:` section per record in dataset order, all
/// joined with single spaces. `WEATHER:` and `WAVES:` are emitted only when
/// the record has facts of that kind.
///
/// Pure and deterministic; an empty dataset yields the prefix alone.
pub fn compose(dataset: &MaritimeDataset, prefix: &str) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !prefix.is_empty() {
        sections.push(prefix.to_string());
    }

    for location in &dataset.locations {
        let mut section = format!("LOCATION: {}", location.name);

        if !location.weather.is_empty() {
            section.push_str(&format!(" WEATHER: {}", location.weather.join(" ")));
        }
        if !location.waves.is_empty() {
            section.push_str(&format!(" WAVES: {}", location.waves.join(" ")));
        }

        sections.push(section);
    }

    sections.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use seascribe_extract::LocationRecord;

    fn record(name: &str, weather: &[&str], waves: &[&str]) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            weather: weather.iter().map(|s| s.to_string()).collect(),
            waves: waves.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_dataset_yields_prefix_alone() {
        let dataset = MaritimeDataset::default();
        assert_eq!(compose(&dataset, "Write a story:"), "Write a story:");
        assert_eq!(compose(&dataset, ""), "");
    }

    #[test]
    fn test_full_record_layout() {
        let dataset = MaritimeDataset {
            locations: vec![record(
                "Cape Cod Bay",
                &["wind: 12 knots", "sky: clear"],
                &["swell: 3 feet"],
            )],
        };
        assert_eq!(
            compose(&dataset, "Prefix."),
            "Prefix. LOCATION: Cape Cod Bay WEATHER: wind: 12 knots sky: clear WAVES: swell: 3 feet"
        );
    }

    #[test]
    fn test_empty_fact_sections_are_omitted() {
        let dataset = MaritimeDataset {
            locations: vec![record("Nantucket", &[], &["tide: ebbing"])],
        };
        let prompt = compose(&dataset, "");
        assert_eq!(prompt, "LOCATION: Nantucket WAVES: tide: ebbing");
        assert!(!prompt.contains("WEATHER:"));
    }

    #[test]
    fn test_one_location_section_per_record_in_order() {
        let dataset = MaritimeDataset {
            locations: vec![
                record("First", &["wind: a"], &[]),
                record("Second", &[], &["swell: b"]),
            ],
        };
        let prompt = compose(&dataset, "");

        assert_eq!(prompt.matches("LOCATION: First").count(), 1);
        assert_eq!(prompt.matches("LOCATION: Second").count(), 1);
        let first = prompt.find("LOCATION: First").unwrap();
        let second = prompt.find("LOCATION: Second").unwrap();
        assert!(first < second);
    }
}
