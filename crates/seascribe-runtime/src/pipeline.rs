//! The extract → compose → generate → segment → assemble pipeline.

use seascribe_extract::extract_maritime_data;
use seascribe_llm::{GenerationConfig, NarrativeClient};
use seascribe_narrate::{compose, segment, ResponseEnvelope};
use serde_json::Value;
use tracing::{error, info};

/// Run the full pipeline for one document.
///
/// All stages except the generation call are pure transformations that never
/// fail. A generation failure is caught exactly here and rendered into an
/// error envelope, so callers always receive a well-formed
/// [`ResponseEnvelope`].
pub async fn run(
    client: &NarrativeClient,
    document: &Value,
    prefix: &str,
    config: &GenerationConfig,
) -> ResponseEnvelope {
    let dataset = extract_maritime_data(document);
    info!("Extracted {} location(s)", dataset.locations.len());

    let prompt = compose(&dataset, prefix);

    match client.generate(&prompt, config).await {
        Ok(reply) => {
            let narratives = segment(&reply, &dataset.locations);
            ResponseEnvelope::success(narratives, &config.model, Some(&dataset))
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            ResponseEnvelope::error(&config.model, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seascribe_narrate::ResponseStatus;
    use serde_json::json;

    #[tokio::test]
    async fn test_generation_failure_becomes_error_envelope() {
        // A keyless client fails before any network traffic.
        let client = NarrativeClient::new(None);
        let document = json!({"waypoint": "Cape Cod Bay", "wind": "12 knots"});

        let envelope = run(&client, &document, "prefix: ", &GenerationConfig::default()).await;

        assert_eq!(envelope.status, ResponseStatus::Error);
        assert!(envelope.narratives.is_empty());
        assert_eq!(envelope.locations_count, 0);
        assert!(envelope
            .error
            .as_deref()
            .unwrap()
            .contains("ANTHROPIC_API_KEY"));
    }
}
