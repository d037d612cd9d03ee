//! Sort/slice view over a filtered record set

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::models::{Alert, Page, TrafficLogEntry};
use crate::{AppError, AppResult};

/// Records carrying an ISO-8601 timestamp
pub trait Timestamped {
    fn timestamp(&self) -> &str;
}

impl Timestamped for Alert {
    fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl Timestamped for TrafficLogEntry {
    fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl<R: Timestamped + ?Sized> Timestamped for &R {
    fn timestamp(&self) -> &str {
        (**self).timestamp()
    }
}

/// Order newest first. Stable: equal timestamps keep their input order.
/// Unparsable timestamps sort last.
pub fn sort_newest_first<R: Timestamped>(records: &mut [R]) {
    records.sort_by_cached_key(|record| {
        Reverse(
            DateTime::parse_from_rfc3339(record.timestamp())
                .ok()
                .map(|at| at.with_timezone(&Utc)),
        )
    });
}

/// Requested window, with the page size already resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based; out-of-range values are clamped by [`paginate`]
    pub page: i64,
    pub page_size: usize,
}

impl PageRequest {
    /// Resolve client input against the configured default and maximum page size
    pub fn resolve(
        page: Option<i64>,
        page_size: Option<usize>,
        default_size: usize,
        max_size: usize,
    ) -> AppResult<Self> {
        let page_size = match page_size {
            Some(0) => {
                return Err(AppError::ValidationError("page_size must be at least 1".to_string()))
            }
            Some(size) => size.min(max_size),
            None => default_size,
        };

        Ok(Self {
            page: page.unwrap_or(1),
            page_size: page_size.max(1),
        })
    }
}

/// Cut one page out of `records`.
///
/// `total_pages = ceil(len / page_size)`, zero for an empty set. The page
/// index is clamped into `1..=total_pages` (to 1 when there are no pages).
pub fn paginate<T: Clone>(records: &[T], request: PageRequest) -> Page<T> {
    let page_size = request.page_size.max(1);
    let total_items = records.len();
    let total_pages = total_items.div_ceil(page_size);

    let page = if total_pages == 0 {
        1
    } else {
        usize::try_from(request.page.max(1)).unwrap_or(usize::MAX).min(total_pages)
    };

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = if start < end { records[start..end].to_vec() } else { Vec::new() };

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn alert(id: &str, timestamp: &str) -> Alert {
        Alert {
            id: id.to_string(),
            timestamp: timestamp.to_string(),
            severity: Severity::Medium,
            title: "t".to_string(),
            description: "d".to_string(),
            source_ip: None,
            attack_type: None,
            related_log_id: None,
        }
    }

    fn request(page: i64, page_size: usize) -> PageRequest {
        PageRequest { page, page_size }
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let mut alerts = vec![
            alert("old", "2024-01-01T00:00:00.000Z"),
            alert("tie-1", "2024-01-02T00:00:00.000Z"),
            alert("new", "2024-01-03T00:00:00.000Z"),
            alert("tie-2", "2024-01-02T00:00:00.000Z"),
            alert("tie-3", "2024-01-02T00:00:00.000Z"),
        ];

        sort_newest_first(&mut alerts);

        let ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "tie-1", "tie-2", "tie-3", "old"]);
    }

    #[test]
    fn test_sort_compares_instants_not_strings() {
        let mut alerts = vec![
            alert("utc", "2024-01-01T10:00:00.000Z"),
            alert("offset", "2024-01-01T12:30:00.000+05:00"),
        ];

        sort_newest_first(&mut alerts);
        assert_eq!(alerts[0].id, "utc");
    }

    #[test]
    fn test_sort_works_on_references() {
        let alerts = vec![
            alert("a", "2024-01-01T00:00:00.000Z"),
            alert("b", "2024-01-05T00:00:00.000Z"),
        ];
        let mut refs: Vec<&Alert> = alerts.iter().collect();

        sort_newest_first(&mut refs);
        assert_eq!(refs[0].id, "b");
    }

    #[test]
    fn test_empty_set_has_zero_pages() {
        let page = paginate::<u32>(&[], request(1, 15));
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);

        let page = paginate::<u32>(&[], request(4, 15));
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_last_page_is_partial() {
        let rows: Vec<u32> = (0..37).collect();

        let page = paginate(&rows, request(3, 15));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 7);
        assert_eq!(page.items[0], 30);
        assert_eq!(page.items.last(), Some(&36));
    }

    #[test]
    fn test_page_is_clamped() {
        let rows: Vec<u32> = (0..37).collect();

        let beyond = paginate(&rows, request(99, 15));
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items.len(), 7);

        let below = paginate(&rows, request(-4, 15));
        assert_eq!(below.page, 1);
        assert_eq!(below.items, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_exact_multiple() {
        let rows: Vec<u32> = (0..30).collect();
        let page = paginate(&rows, request(2, 15));
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 15);
    }

    #[test]
    fn test_resolve_page_request() {
        let req = PageRequest::resolve(None, None, 10, 100).unwrap();
        assert_eq!(req, request(1, 10));

        let req = PageRequest::resolve(Some(2), Some(500), 10, 100).unwrap();
        assert_eq!(req, request(2, 100));

        assert!(PageRequest::resolve(Some(1), Some(0), 10, 100).is_err());
    }
}
