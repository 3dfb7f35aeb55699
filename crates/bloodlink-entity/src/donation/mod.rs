//! Donation history domain entities.

pub mod model;

pub use model::Donation;
