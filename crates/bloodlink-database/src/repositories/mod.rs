//! Repository implementations for all BloodLink entities.

pub mod badge;
pub mod blood_request;
pub mod donation;
pub mod donor;
pub mod user;
pub mod volunteer;

pub use badge::BadgeRepository;
pub use blood_request::BloodRequestRepository;
pub use donation::DonationRepository;
pub use donor::DonorRepository;
pub use user::UserRepository;
pub use volunteer::VolunteerRepository;
