//! HTTP handlers

pub mod extract;
pub mod health;
pub mod views;
pub mod traffic;
pub mod alerts;
pub mod ai;
