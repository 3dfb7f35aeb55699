//! # bloodlink-api
//!
//! HTTP API layer for BloodLink: the axum router, request handlers, DTOs,
//! and the authenticated-user extractor. Domain errors map to HTTP
//! responses through the `IntoResponse` impl on [`bloodlink_core::AppError`].

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
