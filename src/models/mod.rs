//! Data models

pub mod traffic;
pub mod alert;
pub mod anomaly;
pub mod page;
pub mod view;

pub use traffic::*;
pub use alert::*;
pub use anomaly::*;
pub use page::*;
pub use view::*;
