//! Aggregated profile read-model.

pub mod service;

pub use service::{ProfileService, ProfileStats, ProfileView};
