//! Anomaly explanation adapter

use std::sync::Arc;

use serde_json::{json, Value};

use super::{GenerationError, TextGenerator};
use crate::models::AnomalyExplanation;

fn explanation_prompt(description: &str) -> String {
    format!(
        "You are a network security expert analyzing network traffic data.
Based on your training on the NSL-KDD dataset, determine if the following network behavior is anomalous:

Description: {}

Provide a detailed explanation for your determination, including specific features or patterns that contribute to your decision.
Indicate isAnomalous field true or false based on your analysis.
",
        description
    )
}

fn explanation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isAnomalous": {
                "type": "BOOLEAN",
                "description": "Whether the described network behavior is considered anomalous."
            },
            "explanation": {
                "type": "STRING",
                "description": "An explanation of why the network behavior is considered anomalous or not."
            }
        },
        "required": ["isAnomalous", "explanation"]
    })
}

#[derive(Clone)]
pub struct AnomalyExplainer {
    generator: Arc<dyn TextGenerator>,
}

impl AnomalyExplainer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the service whether `description` is anomalous.
    /// The description is expected to be validated as non-blank by the caller.
    pub async fn explain(&self, description: &str) -> Result<AnomalyExplanation, GenerationError> {
        let prompt = explanation_prompt(description);
        let text = self.generator.generate(&prompt, &explanation_schema()).await?;

        serde_json::from_str(&text).map_err(|e| GenerationError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::fake::FakeGenerator;

    #[tokio::test]
    async fn test_structured_verdict() {
        let fake = Arc::new(FakeGenerator::replying(vec![Ok(
            r#"{"isAnomalous": true, "explanation": "Repeated failed logins then bulk transfer."}"#.to_string(),
        )]));
        let explainer = AnomalyExplainer::new(fake.clone());

        let result = explainer.explain("50 failed SSH logins from 1.2.3.4").await.unwrap();
        assert!(result.is_anomalous);
        assert_eq!(result.explanation, "Repeated failed logins then bulk transfer.");
        assert!(fake.prompts()[0].contains("Description: 50 failed SSH logins from 1.2.3.4"));
    }

    #[tokio::test]
    async fn test_incomplete_output_is_rejected() {
        let fake = Arc::new(FakeGenerator::replying(vec![
            Ok(r#"{"explanation": "missing verdict"}"#.to_string()),
            Ok(r#"{"isAnomalous": "yes", "explanation": "wrong type"}"#.to_string()),
            Err(GenerationError::Network("connection reset".to_string())),
        ]));
        let explainer = AnomalyExplainer::new(fake);

        assert!(matches!(explainer.explain("a").await, Err(GenerationError::Parse(_))));
        assert!(matches!(explainer.explain("b").await, Err(GenerationError::Parse(_))));
        assert!(matches!(explainer.explain("c").await, Err(GenerationError::Network(_))));
    }
}
