//! Single-outstanding-request guard
//!
//! Each adapter in a view owns one gate. While a permit is held, further
//! requests for the same adapter are refused instead of overlapping.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct RequestGate {
    permits: Arc<Semaphore>,
}

/// Held for the lifetime of one outstanding request
#[derive(Debug)]
pub struct InFlight {
    _permit: OwnedSemaphorePermit,
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestGate {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// Claim the gate, or `AppError::Busy` if a request is outstanding
    pub fn try_enter(&self) -> AppResult<InFlight> {
        self.permits
            .clone()
            .try_acquire_owned()
            .map(|permit| InFlight { _permit: permit })
            .map_err(|_| AppError::Busy)
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.permits.available_permits() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_request_is_refused_until_release() {
        let gate = RequestGate::new();

        let first = gate.try_enter().unwrap();
        assert!(gate.is_busy());
        assert!(matches!(gate.try_enter(), Err(AppError::Busy)));

        drop(first);
        assert!(!gate.is_busy());
        assert!(gate.try_enter().is_ok());
    }

    #[test]
    fn test_gates_are_independent() {
        let summary = RequestGate::new();
        let explain = RequestGate::new();

        let _held = summary.try_enter().unwrap();
        assert!(explain.try_enter().is_ok());
    }
}
