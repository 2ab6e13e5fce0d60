//! Permission gate middleware.
//!
//! Every protected route is wrapped by [`guarded`], which threads
//! [`require_permission`] in front of the handler with the permission that
//! route needs. Any denial short-circuits with the same 401 response.

use agency_core::error::CoreError;
use agency_core::permissions::{authorize, Credential, Decision, Permission};
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::MethodRouter;

use crate::auth::jwt::{validate_token, Claims, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// The verified caller behind a request that passed the gate.
///
/// Handlers read it with `Extension<Caller>` for audit logging.
#[derive(Debug, Clone)]
pub struct Caller {
    /// The token's `sub` claim.
    pub subject: String,
    pub permissions: Vec<String>,
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            permissions: claims.permissions,
        }
    }
}

/// Middleware state: shared app state plus the permission one route requires.
#[derive(Clone)]
pub struct PermissionGate {
    state: AppState,
    required: Permission,
}

impl PermissionGate {
    pub fn new(state: AppState, required: Permission) -> Self {
        Self { state, required }
    }
}

/// Attach the permission gate for `required` to every handler in `route`.
pub fn guarded(
    state: &AppState,
    required: Permission,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        PermissionGate::new(state.clone(), required),
        require_permission,
    ))
}

/// Decode `Authorization: Bearer <token>` into verified claims.
///
/// Returns `None` when the header is malformed or the token fails
/// verification; the specific failure is only logged.
fn verify(header: &HeaderValue, jwt: &JwtConfig) -> Option<Claims> {
    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());

    let Some(token) = token else {
        tracing::debug!("Malformed Authorization header");
        return None;
    };

    match validate_token(token, jwt) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(error = %err, "Bearer token failed verification");
            None
        }
    }
}

/// Allow the request through only if its token grants the gate's permission.
pub async fn require_permission(
    State(gate): State<PermissionGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = request
        .headers()
        .get(AUTHORIZATION)
        .map(|header| verify(header, &gate.state.config.jwt));

    let credential = match &claims {
        None => Credential::Missing,
        Some(None) => Credential::Invalid,
        Some(Some(claims)) => Credential::Verified(&claims.permissions),
    };

    if let Decision::Deny(reason) = authorize(credential, gate.required) {
        tracing::warn!(
            permission = %gate.required,
            reason = reason.as_str(),
            method = %request.method(),
            path = %request.uri().path(),
            "Request denied",
        );
        return Err(AppError::Core(CoreError::Unauthorized(
            reason.as_str().to_string(),
        )));
    }

    if let Some(Some(claims)) = claims {
        request.extensions_mut().insert(Caller::from(claims));
    }

    Ok(next.run(request).await)
}
