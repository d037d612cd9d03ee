//! AI adapters
//!
//! Two narrow tasks are delegated to an external text-generation service:
//! explaining whether a described behavior is anomalous, and summarizing
//! intrusion data. Both go through [`TextGenerator`] so the service can be
//! swapped or faked.

pub mod client;
pub mod gate;
pub mod summary;
pub mod explain;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{GeminiClient, GeminiConfig, GenerationError, TextGenerator};
pub use gate::RequestGate;
pub use summary::{format_intrusion_data, IntrusionSummarizer};
pub use explain::AnomalyExplainer;
