//! Filter predicate composer
//!
//! A [`FilterSet`] is the conjunction of zero or more field criteria. Unset,
//! empty and `"all"` selections contribute no criterion, so an empty set
//! passes every record.

use crate::models::{Alert, AlertQuery, Protocol, Severity, TrafficLogEntry, TrafficQuery, TrafficStatus};
use crate::{AppError, AppResult};

/// Selection value that disables a criterion
pub const ALL: &str = "all";

/// One field-level predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Severity(Severity),
    Status(TrafficStatus),
    Protocol(Protocol),
    /// Timestamp starts with this prefix (`YYYY-MM-DD`)
    DatePrefix(String),
    /// Source or destination IP contains this substring
    IpSubstring(String),
}

/// Records that can be tested against a [`Criterion`].
/// Criteria on fields the record does not carry never match.
pub trait Filterable {
    fn satisfies(&self, criterion: &Criterion) -> bool;
}

impl Filterable for TrafficLogEntry {
    fn satisfies(&self, criterion: &Criterion) -> bool {
        match criterion {
            Criterion::Status(status) => self.status == *status,
            Criterion::Protocol(protocol) => self.protocol == *protocol,
            Criterion::DatePrefix(prefix) => self.timestamp.starts_with(prefix.as_str()),
            Criterion::IpSubstring(ip) => {
                self.source_ip.contains(ip.as_str()) || self.destination_ip.contains(ip.as_str())
            }
            Criterion::Severity(_) => false,
        }
    }
}

impl Filterable for Alert {
    fn satisfies(&self, criterion: &Criterion) -> bool {
        match criterion {
            Criterion::Severity(severity) => self.severity == *severity,
            Criterion::DatePrefix(prefix) => self.timestamp.starts_with(prefix.as_str()),
            Criterion::IpSubstring(ip) => self
                .source_ip
                .as_deref()
                .is_some_and(|source| source.contains(ip.as_str())),
            Criterion::Status(_) | Criterion::Protocol(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    criteria: Vec<Criterion>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion; `None` leaves the set unchanged
    pub fn with(mut self, criterion: Option<Criterion>) -> Self {
        self.criteria.extend(criterion);
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// True if the record passes every active criterion
    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        self.criteria.iter().all(|criterion| record.satisfies(criterion))
    }

    /// Matching records, in input order
    pub fn apply<'a, R: Filterable>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    /// Criteria for the traffic log table: status, protocol, IP substring
    pub fn from_traffic_query(query: &TrafficQuery) -> AppResult<Self> {
        Ok(Self::new()
            .with(parse_selection(query.status.as_deref())?.map(Criterion::Status))
            .with(parse_selection(query.protocol.as_deref())?.map(Criterion::Protocol))
            .with(text_selection(query.ip.as_deref()).map(Criterion::IpSubstring)))
    }

    /// Criteria for the alerts list: severity, date prefix
    pub fn from_alert_query(query: &AlertQuery) -> AppResult<Self> {
        Ok(Self::new()
            .with(parse_selection(query.severity.as_deref())?.map(Criterion::Severity))
            .with(text_selection(query.date.as_deref()).map(Criterion::DatePrefix)))
    }
}

/// Trimmed value, or `None` when unset, blank or `"all"`
fn text_selection(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
        .map(str::to_string)
}

fn parse_selection<T>(value: Option<&str>) -> AppResult<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    text_selection(value)
        .map(|v| v.parse::<T>().map_err(AppError::ValidationError))
        .transpose()
}
