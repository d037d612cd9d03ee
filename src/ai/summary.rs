//! Intrusion summary adapter
//!
//! Serializes non-`Normal` traffic into the intrusion-data text block and asks
//! the text-generation service for a daily security briefing.

use std::fmt::Write;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use super::{GenerationError, TextGenerator};
use crate::models::TrafficLogEntry;

pub const INTRUSION_DATA_HEADER: &str = "Intrusion Data Log:\n";
pub const NO_EVENTS_LINE: &str = "No significant intrusion events detected in this period.\n";

const SUMMARY_PROMPT: &str = "\
You are an expert security analyst tasked with summarizing network intrusion data for a daily security briefing.

Your goal is to provide a clear and concise overview of the key security events, trends, and potential threats identified in the provided logs.

Consider these aspects when creating the summary:

- Significant intrusion attempts and their severity.
- The types of attacks observed (e.g., malware, phishing, DDoS).
- Affected systems or areas of the network.
- Overall security posture and any recommended actions.

Here is the intrusion data:

";

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary: String,
}

/// Build the intrusion-data block from `logs`.
///
/// One line per non-`Normal` entry, field order fixed. When no entry
/// qualifies the header is followed by the no-events sentinel only.
pub fn format_intrusion_data(logs: &[TrafficLogEntry]) -> String {
    let mut data = String::from(INTRUSION_DATA_HEADER);
    let mut events = 0usize;

    for log in logs.iter().filter(|log| !log.is_normal()) {
        writeln!(
            data,
            "Timestamp: {}, Source: {}, Dest: {}, Proto: {}, Port: {}, Status: {}, Attack: {}, Details: {}",
            log.timestamp,
            log.source_ip,
            log.destination_ip,
            log.protocol,
            log.port,
            log.status,
            log.attack_type.as_deref().unwrap_or_default(),
            log.details.as_deref().unwrap_or_default(),
        )
        .ok();
        events += 1;
    }

    if events == 0 {
        data.push_str(NO_EVENTS_LINE);
    }

    data
}

fn summary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A concise summary of the intrusion data, highlighting key events, trends, and potential security threats identified in the provided logs."
            }
        },
        "required": ["summary"]
    })
}

#[derive(Clone)]
pub struct IntrusionSummarizer {
    generator: Arc<dyn TextGenerator>,
}

impl IntrusionSummarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Summarize a pre-formatted intrusion-data block. Single attempt, the
    /// summary text is returned as the service produced it.
    pub async fn summarize(&self, intrusion_data: &str) -> Result<String, GenerationError> {
        let prompt = format!("{}{}", SUMMARY_PROMPT, intrusion_data);
        let text = self.generator.generate(&prompt, &summary_schema()).await?;

        let output: SummaryOutput = serde_json::from_str(&text)
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        Ok(output.summary)
    }
}
