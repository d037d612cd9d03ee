//! Alerts handlers

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{AppState, AppResult};
use super::extract::{AppPath, AppQuery};
use crate::models::{Alert, AlertQuery, Page};
use crate::query::{paginate, sort_newest_first, FilterSet, PageRequest};

/// Filtered page of the view's alerts, newest first
pub async fn list(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(query): AppQuery<AlertQuery>,
) -> AppResult<Json<Page<Alert>>> {
    let view = state.views.get(id)?;
    let filter = FilterSet::from_alert_query(&query)?;
    let request = PageRequest::resolve(
        query.page,
        query.page_size,
        state.config.default_page_size,
        state.config.max_page_size,
    )?;

    let mut matching = filter.apply(&view.alerts);
    sort_newest_first(&mut matching);
    if !filter.is_empty() {
        tracing::debug!("View {}: {} alerts match {:?}", id, matching.len(), filter.criteria());
    }

    Ok(Json(paginate(&matching, request).map(Alert::clone)))
}
