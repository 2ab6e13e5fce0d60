//! Domain building blocks for the agency API.
//!
//! Everything here is pure: field validation, the permission table, and the
//! error types shared by the storage and HTTP layers.

pub mod error;
pub mod permissions;
pub mod types;
pub mod validation;
