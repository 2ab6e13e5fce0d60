//! Request middleware.
//!
//! - [`permission::require_permission`] -- verifies the bearer token and checks
//!   the route's required permission before the handler runs.
//! - [`permission::Caller`] -- the verified caller, inserted as a request extension.

pub mod permission;
