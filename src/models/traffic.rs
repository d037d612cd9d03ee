//! Traffic log model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Labels attached to `Normal` traffic
pub const BENIGN_LABELS: [&str; 4] = ["Normal Activity", "Routine Check", "User Login", "Data Sync"];

/// Labels attached to `Anomalous` / `Suspicious` traffic (also used by alerts)
pub const ATTACK_TYPES: [&str; 6] = ["DoS", "Port Scan", "Malware", "SQL Injection", "XSS", "Brute Force"];

pub const NORMAL_DETAILS: &str = "Standard operational traffic.";
pub const ANOMALY_DETAILS: &str =
    "Anomaly detected based on heuristic analysis. Pattern deviates from baseline.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrafficLogEntry {
    pub id: String,
    pub timestamp: String,
    pub source_ip: String,
    pub destination_ip: String,
    pub protocol: Protocol,
    pub port: u16,
    pub payload_size: u32,
    pub status: TrafficStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_type: Option<String>,
}

impl TrafficLogEntry {
    pub fn is_normal(&self) -> bool {
        self.status == TrafficStatus::Normal
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrafficStatus {
    Normal,
    Anomalous,
    Suspicious,
}

impl TrafficStatus {
    pub const ALL: [TrafficStatus; 3] = [Self::Normal, Self::Anomalous, Self::Suspicious];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Anomalous => "Anomalous",
            Self::Suspicious => "Suspicious",
        }
    }
}

impl fmt::Display for TrafficStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown traffic status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    Http,
    Dns,
}

impl Protocol {
    pub const ALL: [Protocol; 5] = [Self::Tcp, Self::Udp, Self::Icmp, Self::Http, Self::Dns];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
            Self::Icmp => "ICMP",
            Self::Http => "HTTP",
            Self::Dns => "DNS",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|protocol| protocol.as_str() == s)
            .ok_or_else(|| format!("Unknown protocol: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in TrafficStatus::ALL {
            assert_eq!(status.as_str().parse::<TrafficStatus>().unwrap(), status);
        }
        assert!("normal".parse::<TrafficStatus>().is_err());
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = TrafficLogEntry {
            id: "log-1-2024-01-01T00:00:00.000Z".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            source_ip: "18.1.2.3".to_string(),
            destination_ip: "103.27.53.7".to_string(),
            protocol: Protocol::Icmp,
            port: 443,
            payload_size: 512,
            status: TrafficStatus::Suspicious,
            details: None,
            attack_type: Some("XSS".to_string()),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["sourceIp"], "18.1.2.3");
        assert_eq!(json["protocol"], "ICMP");
        assert_eq!(json["status"], "Suspicious");
        assert_eq!(json["attackType"], "XSS");
        assert!(json.get("details").is_none());
    }
}
