//! Record sources
//!
//! Views pull their traffic logs and alerts through [`DataSource`] so a real
//! ingestion backend can replace the mock generator without touching the
//! query layer or the handlers.

pub mod mock;

pub use mock::MockDataSource;

use crate::models::{Alert, TrafficLogEntry};
use crate::AppResult;

pub trait DataSource: Send + Sync {
    /// Return `count` traffic log entries
    fn list_traffic_logs(&self, count: usize) -> AppResult<Vec<TrafficLogEntry>>;

    /// Return `count` alerts
    fn list_alerts(&self, count: usize) -> AppResult<Vec<Alert>>;
}
