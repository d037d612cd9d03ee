//! Anomaly explanation model

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Structured verdict returned by the anomaly explanation call.
/// Both fields are required when parsing the service response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyExplanation {
    pub is_anomalous: bool,
    pub explanation: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExplainRequest {
    #[validate(
        length(max = 4000, message = "Description is too long"),
        custom(function = "not_blank", message = "Please enter a network behavior description")
    )]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SummaryRequest {
    /// Pre-formatted intrusion data; the view's own logs are used when absent
    #[serde(alias = "intrusionData")]
    #[validate(custom(function = "not_blank", message = "Intrusion data must not be empty"))]
    pub intrusion_data: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_description_rejected() {
        let req = ExplainRequest { description: "   \n\t".to_string() };
        assert!(req.validate().is_err());

        let req = ExplainRequest { description: "Port sweep from 10.0.0.5".to_string() };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_summary_request_optional_data() {
        assert!(SummaryRequest::default().validate().is_ok());
        let req = SummaryRequest { intrusion_data: Some(String::new()) };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_summary_request_accepts_camel_case_and_rejects_strays() {
        let req: SummaryRequest = serde_json::from_str(r#"{"intrusionData": "block"}"#).unwrap();
        assert_eq!(req.intrusion_data.as_deref(), Some("block"));

        assert!(serde_json::from_str::<SummaryRequest>(r#"{"data": "block"}"#).is_err());
        assert!(serde_json::from_str::<SummaryRequest>(r#"{"intrusion_data": 42}"#).is_err());
    }

    #[test]
    fn test_explanation_requires_both_fields() {
        let parsed: Result<AnomalyExplanation, _> =
            serde_json::from_str(r#"{"isAnomalous": true}"#);
        assert!(parsed.is_err());

        let parsed: AnomalyExplanation =
            serde_json::from_str(r#"{"isAnomalous": false, "explanation": "baseline"}"#).unwrap();
        assert!(!parsed.is_anomalous);
    }
}
