//! Mock data source
//!
//! Generates schema-valid random traffic logs and alerts. Identifiers embed
//! the 1-based position within the batch plus the timestamp, so they are
//! unique inside one call's output.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::DataSource;
use crate::models::{
    Alert, Protocol, Severity, TrafficLogEntry, TrafficStatus,
    ALERT_DESCRIPTION, ALERT_TITLES, ANOMALY_DETAILS, ATTACK_TYPES, BENIGN_LABELS, NORMAL_DETAILS,
};
use crate::AppResult;

/// Traffic timestamps fall within this window before now
const TRAFFIC_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Alert timestamps fall within this window before now
const ALERT_WINDOW_MS: i64 = 48 * 60 * 60 * 1000;

/// Max offset between an alert and its (mock) related log
const RELATED_LOG_OFFSET_MS: i64 = 60 * 1000;

pub struct MockDataSource {
    rng: Mutex<StdRng>,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic source, used by tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn traffic_entry(rng: &mut StdRng, index: usize, now: DateTime<Utc>) -> TrafficLogEntry {
        let status = *TrafficStatus::ALL.choose(rng).unwrap_or(&TrafficStatus::Normal);
        let is_normal = status == TrafficStatus::Normal;
        let timestamp = iso(now - Duration::milliseconds(rng.gen_range(0..TRAFFIC_WINDOW_MS)));

        let (details, labels): (&str, &[&str]) = if is_normal {
            (NORMAL_DETAILS, &BENIGN_LABELS[..])
        } else {
            (ANOMALY_DETAILS, &ATTACK_TYPES[..])
        };

        TrafficLogEntry {
            id: format!("log-{}-{}", index, timestamp),
            timestamp,
            source_ip: random_ip(rng),
            destination_ip: format!("103.27.53.{}", rng.gen_range(1..=254)),
            protocol: *Protocol::ALL.choose(rng).unwrap_or(&Protocol::Tcp),
            port: rng.gen_range(1..=65535),
            payload_size: rng.gen_range(60..1460),
            status,
            details: Some(details.to_string()),
            attack_type: labels.choose(rng).map(|label| label.to_string()),
        }
    }

    fn alert(rng: &mut StdRng, index: usize, now: DateTime<Utc>) -> Alert {
        let at = now - Duration::milliseconds(rng.gen_range(0..ALERT_WINDOW_MS));
        let related_at = at - Duration::milliseconds(rng.gen_range(0..RELATED_LOG_OFFSET_MS));
        let timestamp = iso(at);

        Alert {
            id: format!("alert-{}-{}", index, timestamp),
            timestamp,
            severity: *Severity::ALL.choose(rng).unwrap_or(&Severity::Low),
            title: ALERT_TITLES.choose(rng).unwrap_or(&ALERT_TITLES[0]).to_string(),
            description: ALERT_DESCRIPTION.to_string(),
            source_ip: Some(random_ip(rng)),
            attack_type: ATTACK_TYPES.choose(rng).map(|label| label.to_string()),
            related_log_id: Some(format!("log-{}-{}", index, iso(related_at))),
        }
    }
}

impl DataSource for MockDataSource {
    fn list_traffic_logs(&self, count: usize) -> AppResult<Vec<TrafficLogEntry>> {
        let now = Utc::now();
        let mut rng = self.rng.lock();
        Ok((1..=count).map(|i| Self::traffic_entry(&mut rng, i, now)).collect())
    }

    fn list_alerts(&self, count: usize) -> AppResult<Vec<Alert>> {
        let now = Utc::now();
        let mut rng = self.rng.lock();
        Ok((1..=count).map(|i| Self::alert(&mut rng, i, now)).collect())
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-01-01T12:00:00.000Z`
fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn random_ip(rng: &mut StdRng) -> String {
    format!(
        "1{}.{}.{}.{}",
        rng.gen_range(8..=9),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(1..=254)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_batch_has_exact_length_and_unique_ids() {
        let source = MockDataSource::seeded(7);

        for count in [0, 1, 37, 100] {
            let logs = source.list_traffic_logs(count).unwrap();
            assert_eq!(logs.len(), count);
            let ids: HashSet<_> = logs.iter().map(|l| l.id.as_str()).collect();
            assert_eq!(ids.len(), count);

            let alerts = source.list_alerts(count).unwrap();
            assert_eq!(alerts.len(), count);
            let ids: HashSet<_> = alerts.iter().map(|a| a.id.as_str()).collect();
            assert_eq!(ids.len(), count);
        }
    }

    #[test]
    fn test_status_and_label_are_paired() {
        let source = MockDataSource::seeded(42);

        for log in source.list_traffic_logs(500).unwrap() {
            let label = log.attack_type.as_deref().unwrap();
            if log.is_normal() {
                assert!(BENIGN_LABELS.contains(&label), "normal log with label {}", label);
                assert!(!ATTACK_TYPES.contains(&label));
                assert_eq!(log.details.as_deref(), Some(NORMAL_DETAILS));
            } else {
                assert!(ATTACK_TYPES.contains(&label), "{} log with label {}", log.status, label);
                assert!(!BENIGN_LABELS.contains(&label));
                assert_eq!(log.details.as_deref(), Some(ANOMALY_DETAILS));
            }
        }
    }

    #[test]
    fn test_field_ranges() {
        let source = MockDataSource::seeded(3);

        for log in source.list_traffic_logs(300).unwrap() {
            assert!(log.port >= 1);
            assert!((60..1460).contains(&log.payload_size));
            assert!(log.destination_ip.starts_with("103.27.53."));
            assert!(log.source_ip.starts_with("18.") || log.source_ip.starts_with("19."));
            assert!(DateTime::parse_from_rfc3339(&log.timestamp).is_ok());
            assert!(log.timestamp.ends_with('Z'));
        }
    }

    #[test]
    fn test_alert_shape() {
        let source = MockDataSource::seeded(11);
        let now = Utc::now();

        for alert in source.list_alerts(100).unwrap() {
            let at = DateTime::parse_from_rfc3339(&alert.timestamp).unwrap();
            assert!(now.signed_duration_since(at) <= Duration::hours(48) + Duration::seconds(5));
            assert!(ALERT_TITLES.contains(&alert.title.as_str()));
            assert!(alert.related_log_id.as_deref().unwrap().starts_with("log-"));
            assert!(alert.id.starts_with("alert-"));
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = MockDataSource::seeded(99).list_traffic_logs(5).unwrap();
        let b = MockDataSource::seeded(99).list_traffic_logs(5).unwrap();

        let strip = |logs: Vec<TrafficLogEntry>| -> Vec<(String, String, u16)> {
            logs.into_iter().map(|l| (l.source_ip, l.destination_ip, l.port)).collect()
        };
        assert_eq!(strip(a), strip(b));
    }
}
