//! Permission table and the allow/deny decision.
//!
//! Each protected operation requires exactly one permission string. The
//! decision distinguishes why a caller was denied so the reason can be
//! logged, but the HTTP layer collapses every denial into one response.

use std::fmt;

/// A capability string required by one (resource, verb) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    GetActors,
    GetMovies,
    PostActors,
    PostMovies,
    PatchActors,
    PatchMovies,
    DeleteActors,
    DeleteMovies,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::GetActors,
        Permission::GetMovies,
        Permission::PostActors,
        Permission::PostMovies,
        Permission::PatchActors,
        Permission::PatchMovies,
        Permission::DeleteActors,
        Permission::DeleteMovies,
    ];

    /// The string as it appears in a token's `permissions` claim.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::GetActors => "get:actors",
            Permission::GetMovies => "get:movies",
            Permission::PostActors => "post:actors",
            Permission::PostMovies => "post:movies",
            Permission::PatchActors => "patch:actors",
            Permission::PatchMovies => "patch:movies",
            Permission::DeleteActors => "delete:actors",
            Permission::DeleteMovies => "delete:movies",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller presented, after the identity provider had its say.
#[derive(Debug, Clone, Copy)]
pub enum Credential<'a> {
    /// No `Authorization: Bearer` header.
    Missing,
    /// A token was supplied but could not be verified.
    Invalid,
    /// A verified token carrying this permission set.
    Verified(&'a [String]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    MissingCredential,
    InvalidCredential,
    MissingPermission,
}

impl DenyReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenyReason::MissingCredential => "missing credential",
            DenyReason::InvalidCredential => "invalid credential",
            DenyReason::MissingPermission => "permission not granted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

/// Decide whether `credential` may perform the operation guarded by `required`.
pub fn authorize(credential: Credential<'_>, required: Permission) -> Decision {
    match credential {
        Credential::Missing => Decision::Deny(DenyReason::MissingCredential),
        Credential::Invalid => Decision::Deny(DenyReason::InvalidCredential),
        Credential::Verified(granted) => {
            if granted.iter().any(|p| p == required.as_str()) {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::MissingPermission)
            }
        }
    }
}
