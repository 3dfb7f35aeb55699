//! Volunteer domain entities.

pub mod model;
pub mod status;

pub use model::Volunteer;
pub use status::VolunteerStatus;
