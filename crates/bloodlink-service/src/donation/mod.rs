//! Donation recording and badge awarding.

pub mod awarder;
pub mod service;

pub use awarder::BadgeAwarder;
pub use service::DonationService;
