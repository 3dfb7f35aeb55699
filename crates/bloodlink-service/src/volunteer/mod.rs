//! Volunteer coordination operations.

pub mod service;

pub use service::VolunteerService;
