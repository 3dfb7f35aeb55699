//! # bloodlink-auth
//!
//! Authentication and authorization primitives for BloodLink: Argon2id
//! password hashing and policy validation, JWT access/refresh tokens, and
//! role-based access control.

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{RbacEnforcer, SystemPermission};
