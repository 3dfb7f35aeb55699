//! Donor directory operations.

pub mod service;

pub use service::DonorService;
