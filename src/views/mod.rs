//! View sessions
//!
//! A view is one opened dashboard page: the records generated for it, the
//! last successful AI results shown on it and one request gate per adapter.
//! Views share nothing with each other and are discarded on close or after
//! sitting idle past the TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::ai::RequestGate;
use crate::models::{
    Alert, AnomalyExplanation, DashboardStats, Severity, TrafficLogEntry, TrafficStatus, ViewInfo, ViewKind,
};
use crate::source::DataSource;
use crate::{AppError, AppResult};

const RECENT_ALERTS: usize = 3;
const RECENT_TRAFFIC: usize = 5;

/// Last successful result of an adapter. Failures never touch it.
#[derive(Debug)]
pub struct ResultSlot<T> {
    value: RwLock<Option<T>>,
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self { value: RwLock::new(None) }
    }
}

impl<T: Clone> ResultSlot<T> {
    pub fn store(&self, value: T) {
        *self.value.write() = Some(value);
    }

    pub fn latest(&self) -> Option<T> {
        self.value.read().clone()
    }
}

#[derive(Debug)]
pub struct View {
    pub id: Uuid,
    pub kind: ViewKind,
    pub opened_at: DateTime<Utc>,
    pub traffic: Vec<TrafficLogEntry>,
    pub alerts: Vec<Alert>,
    pub summary: ResultSlot<String>,
    pub explanation: ResultSlot<AnomalyExplanation>,
    pub summary_gate: RequestGate,
    pub explain_gate: RequestGate,
    last_access: Mutex<Instant>,
}

impl View {
    fn new(kind: ViewKind, traffic: Vec<TrafficLogEntry>, alerts: Vec<Alert>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            opened_at: Utc::now(),
            traffic,
            alerts,
            summary: ResultSlot::default(),
            explanation: ResultSlot::default(),
            summary_gate: RequestGate::new(),
            explain_gate: RequestGate::new(),
            last_access: Mutex::new(Instant::now()),
        }
    }

    pub fn info(&self) -> ViewInfo {
        ViewInfo {
            id: self.id,
            kind: self.kind,
            traffic_count: self.traffic.len(),
            alert_count: self.alerts.len(),
            opened_at: self.opened_at,
        }
    }

    /// Headline numbers and recent rows for the dashboard page
    pub fn stats(&self) -> DashboardStats {
        let count_status = |status: TrafficStatus| self.traffic.iter().filter(|l| l.status == status).count();

        DashboardStats {
            total_alerts: self.alerts.len(),
            critical_alerts: self.alerts.iter().filter(|a| a.severity == Severity::Critical).count(),
            total_traffic: self.traffic.len(),
            anomalous_traffic: count_status(TrafficStatus::Anomalous),
            suspicious_traffic: count_status(TrafficStatus::Suspicious),
            recent_alerts: self.alerts.iter().take(RECENT_ALERTS).cloned().collect(),
            recent_traffic: self.traffic.iter().take(RECENT_TRAFFIC).cloned().collect(),
        }
    }

    fn touch(&self) {
        *self.last_access.lock() = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.last_access.lock().elapsed()
    }
}

pub struct ViewStore {
    views: RwLock<HashMap<Uuid, Arc<View>>>,
    ttl: Duration,
    capacity: usize,
}

impl ViewStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Generate the records for `kind` and register a new view
    pub fn open(&self, kind: ViewKind, source: &dyn DataSource) -> AppResult<Arc<View>> {
        let (traffic_count, alert_count) = kind.record_counts();
        let traffic = source.list_traffic_logs(traffic_count)?;
        let alerts = source.list_alerts(alert_count)?;
        let view = Arc::new(View::new(kind, traffic, alerts));

        let mut views = self.views.write();
        views.retain(|_, v| v.idle_for() < self.ttl);

        while views.len() >= self.capacity {
            let oldest = views
                .iter()
                .max_by_key(|(_, v)| v.idle_for())
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    views.remove(&id);
                    tracing::debug!("Evicted view {}", id);
                }
                None => break,
            }
        }

        views.insert(view.id, view.clone());
        tracing::info!(
            "Opened {} view {} ({} logs, {} alerts)",
            kind.as_str(), view.id, traffic_count, alert_count
        );

        Ok(view)
    }

    /// Look up a live view and mark it as used
    pub fn get(&self, id: Uuid) -> AppResult<Arc<View>> {
        let view = self.views.read().get(&id).cloned();

        match view {
            Some(view) if view.idle_for() < self.ttl => {
                view.touch();
                Ok(view)
            }
            Some(_) => {
                self.views.write().remove(&id);
                tracing::debug!("View {} expired", id);
                Err(view_not_found())
            }
            None => Err(view_not_found()),
        }
    }

    pub fn close(&self, id: Uuid) -> AppResult<()> {
        match self.views.write().remove(&id) {
            Some(_) => {
                tracing::info!("Closed view {}", id);
                Ok(())
            }
            None => Err(view_not_found()),
        }
    }

    pub fn len(&self) -> usize {
        self.views.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn view_not_found() -> AppError {
    AppError::NotFound("View not found".to_string())
}
