//! View session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Alert, TrafficLogEntry};

/// Dashboard pages that can be opened as a view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Dashboard,
    TrafficLog,
    Alerts,
    AnomalyDetector,
}

impl ViewKind {
    /// Number of (traffic logs, alerts) generated when the view opens
    pub fn record_counts(&self) -> (usize, usize) {
        match self {
            Self::Dashboard => (20, 10),
            Self::TrafficLog => (100, 0),
            Self::Alerts => (0, 50),
            Self::AnomalyDetector => (0, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::TrafficLog => "traffic_log",
            Self::Alerts => "alerts",
            Self::AnomalyDetector => "anomaly_detector",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenViewRequest {
    pub kind: ViewKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewInfo {
    pub id: Uuid,
    pub kind: ViewKind,
    pub traffic_count: usize,
    pub alert_count: usize,
    pub opened_at: DateTime<Utc>,
}

/// Query string for the traffic log table
#[derive(Debug, Deserialize, Default)]
pub struct TrafficQuery {
    pub status: Option<String>,
    pub protocol: Option<String>,
    pub ip: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<usize>,
}

/// Query string for the alerts list
#[derive(Debug, Deserialize, Default)]
pub struct AlertQuery {
    pub severity: Option<String>,
    /// `YYYY-MM-DD` or any timestamp prefix
    pub date: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_alerts: usize,
    pub critical_alerts: usize,
    pub total_traffic: usize,
    pub anomalous_traffic: usize,
    pub suspicious_traffic: usize,
    pub recent_alerts: Vec<Alert>,
    pub recent_traffic: Vec<TrafficLogEntry>,
}
