//! Donor domain entities.

pub mod blood_group;
pub mod model;

pub use blood_group::BloodGroup;
pub use model::Donor;
