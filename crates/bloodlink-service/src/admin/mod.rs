//! Administrative operations.

pub mod service;

pub use service::{AdminService, AdminStats};
