//! Bearer token verification.
//!
//! - [`jwt`] -- decoding and validating identity-provider tokens into [`jwt::Claims`].

pub mod jwt;
