//! View lifecycle handlers

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{AppState, AppResult};
use super::extract::{AppJson, AppPath};
use crate::models::{DashboardStats, OpenViewRequest, ViewInfo};

/// Open a view: generate its records after the configured artificial delay
pub async fn open(
    State(state): State<AppState>,
    AppJson(req): AppJson<OpenViewRequest>,
) -> AppResult<(StatusCode, Json<ViewInfo>)> {
    if state.config.mock_latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.mock_latency_ms)).await;
    }

    let view = state.views.open(req.kind, state.source.as_ref())?;
    Ok((StatusCode::CREATED, Json(view.info())))
}

/// Get view info
pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ViewInfo>> {
    let view = state.views.get(id)?;
    Ok(Json(view.info()))
}

/// Discard a view
pub async fn close(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    state.views.close(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Dashboard statistics for a view
pub async fn stats(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<DashboardStats>> {
    let view = state.views.get(id)?;
    Ok(Json(view.stats()))
}
