//! AI handlers - intrusion summary and anomaly explanation
//!
//! Each handler claims the view's gate for its adapter before calling out, so
//! a view never has two requests to the same adapter in flight. A failed call
//! leaves the view's last successful result in place.

use axum::{body::Bytes, extract::State, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{AppError, AppState, AppResult};
use super::extract::{AppJson, AppPath};
use crate::ai::format_intrusion_data;
use crate::models::{AnomalyExplanation, ExplainRequest, SummaryRequest, SummaryResponse};

/// Generate a security summary from the view's traffic (or supplied data)
pub async fn summarize(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    body: Bytes,
) -> AppResult<Json<SummaryResponse>> {
    let view = state.views.get(id)?;
    let req = parse_summary_request(&body)?;
    req.validate()?;

    let _in_flight = view.summary_gate.try_enter()?;

    let intrusion_data = match req.intrusion_data {
        Some(data) => data,
        None => {
            let sample = state.config.summary_sample_size.min(view.traffic.len());
            format_intrusion_data(&view.traffic[..sample])
        }
    };

    match state.summarizer.summarize(&intrusion_data).await {
        Ok(summary) => {
            view.summary.store(summary.clone());
            tracing::info!("Summary generated for view {}", id);
            Ok(Json(SummaryResponse { summary }))
        }
        Err(e) => {
            tracing::error!("Error generating summary for view {}: {}", id, e);
            Err(e.into())
        }
    }
}

/// An empty body asks for a summary of the view's own logs
fn parse_summary_request(body: &[u8]) -> AppResult<SummaryRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SummaryRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("Invalid request body: {}", e)))
}

/// Last successful summary of the view, if any
pub async fn latest_summary(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Option<SummaryResponse>>> {
    let view = state.views.get(id)?;
    Ok(Json(view.summary.latest().map(|summary| SummaryResponse { summary })))
}

/// Ask whether a described network behavior is anomalous
pub async fn explain(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<ExplainRequest>,
) -> AppResult<Json<AnomalyExplanation>> {
    let view = state.views.get(id)?;

    // Blank input never reaches the adapter; the text itself is forwarded as given
    req.validate()?;

    let _in_flight = view.explain_gate.try_enter()?;

    match state.explainer.explain(&req.description).await {
        Ok(explanation) => {
            view.explanation.store(explanation.clone());
            tracing::info!(
                "Anomaly analysis for view {}: anomalous={}",
                id, explanation.is_anomalous
            );
            Ok(Json(explanation))
        }
        Err(e) => {
            tracing::error!("Error calling anomaly analysis for view {}: {}", id, e);
            Err(e.into())
        }
    }
}

/// Last successful explanation of the view, if any
pub async fn latest_explanation(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Option<AnomalyExplanation>>> {
    let view = state.views.get(id)?;
    Ok(Json(view.explanation.latest()))
}
