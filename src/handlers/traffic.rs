//! Traffic log handlers

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{AppState, AppResult};
use super::extract::{AppPath, AppQuery};
use crate::models::{Page, TrafficLogEntry, TrafficQuery};
use crate::query::{paginate, FilterSet, PageRequest};
use crate::query::filter::ALL;

/// Filtered page of the view's traffic logs, in generation order
pub async fn list(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(query): AppQuery<TrafficQuery>,
) -> AppResult<Json<Page<TrafficLogEntry>>> {
    let view = state.views.get(id)?;
    let filter = FilterSet::from_traffic_query(&query)?;
    let request = PageRequest::resolve(
        query.page,
        query.page_size,
        state.config.default_page_size,
        state.config.max_page_size,
    )?;

    let matching = filter.apply(&view.traffic);
    tracing::debug!(
        "View {}: {} of {} logs match {:?}",
        id, matching.len(), view.traffic.len(), filter.criteria()
    );

    Ok(Json(paginate(&matching, request).map(TrafficLogEntry::clone)))
}

/// Protocol choices for the filter: `all` followed by those present in the view
pub async fn protocols(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Vec<String>>> {
    let view = state.views.get(id)?;

    let mut choices = vec![ALL.to_string()];
    for log in &view.traffic {
        let protocol = log.protocol.as_str();
        if !choices.iter().any(|c| c == protocol) {
            choices.push(protocol.to_string());
        }
    }

    Ok(Json(choices))
}
