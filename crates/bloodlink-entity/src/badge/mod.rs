//! Badge domain entities.

pub mod model;

pub use model::{Badge, UserBadge};
