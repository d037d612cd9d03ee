//! Alert model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ALERT_TITLES: [&str; 7] = [
    "Unusual Login Attempt Detected",
    "High Volume Outbound Traffic from Internal Host",
    "Potential Malware Signature Found in Payload",
    "Sustained Port Scanning Activity on Critical Server",
    "Anomalous Network Connection to External Geo-location",
    "Multiple Failed Authentication Attempts",
    "Data Exfiltration Pattern Identified",
];

pub const ALERT_DESCRIPTION: &str = "Suspicious activity detected on the monitored portal. \
    Immediate investigation recommended. Review associated logs for more details.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub timestamp: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_type: Option<String>,
    /// Display-only hint; not guaranteed to resolve to a traffic log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_log_id: Option<String>,
}

/// Alert urgency. Declaration order is most to least urgent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| format!("Unknown severity: {}", s))
    }
}
