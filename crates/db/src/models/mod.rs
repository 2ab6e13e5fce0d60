//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct whose JSON form is the API shape
//! - A create DTO holding already-validated values for inserts
//! - An update DTO (all `Option` fields) for partial patches

pub mod actor;
pub mod movie;
