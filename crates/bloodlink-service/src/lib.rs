//! # bloodlink-service
//!
//! Business logic for BloodLink. Each sub-module owns one slice of the
//! domain: entity CRUD services, the donation write path with its badge
//! awarder, the aggregated profile read-model, and admin operations.
//!
//! Services receive their repositories (and, where needed, the connection
//! pool for transactions) through constructor injection — there is no
//! ambient global store handle.

pub mod admin;
pub mod auth;
pub mod context;
pub mod donation;
pub mod donor;
pub mod profile;
pub mod request;
pub mod volunteer;

pub use context::RequestContext;
