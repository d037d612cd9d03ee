//! Query layer - filter, order and paginate in-memory record sets

pub mod filter;
pub mod view;

pub use filter::FilterSet;
pub use view::{paginate, sort_newest_first, PageRequest};
