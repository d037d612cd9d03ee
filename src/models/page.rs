//! Paged response envelope

use serde::{Deserialize, Serialize};

/// One window of a filtered record set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, after clamping
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    /// 0 when the filtered set is empty
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
