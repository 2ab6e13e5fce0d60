//! JWT validation for identity-provider access tokens.
//!
//! Tokens are HS256-signed and carry the caller's granted capabilities in a
//! `permissions` array claim. Signature, expiry, and (when configured)
//! audience and issuer are checked here; deciding whether the permission set
//! is sufficient is left to the permission gate.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims extracted from a verified access token.
#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity provider's id for the caller.
    pub sub: String,
    /// Granted permission strings (e.g. `"get:actors"`). Absent means none.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Wire shape of a token minted by [`generate_access_token`].
///
/// `aud` and `iss` are checked by `jsonwebtoken` itself, which also accepts
/// the array form of `aud`, so [`Claims`] does not carry them.
#[derive(Serialize)]
struct IssuedClaims<'a> {
    sub: &'a str,
    permissions: &'a [&'a str],
    exp: i64,
    iat: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    aud: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iss: Option<&'a str>,
}

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Required `aud` claim, if any.
    pub audience: Option<String>,
    /// Required `iss` claim, if any.
    pub issuer: Option<String>,
}

impl JwtConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `AUTH_SECRET`   | **yes**  | --      |
    /// | `AUTH_AUDIENCE` | no       | unset   |
    /// | `AUTH_ISSUER`   | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("AUTH_SECRET").expect("AUTH_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "AUTH_SECRET must not be empty");

        let optional = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        Self {
            secret,
            audience: optional("AUTH_AUDIENCE"),
            issuer: optional("AUTH_ISSUER"),
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        match &self.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &config.validation(),
    )?;
    Ok(token_data.claims)
}

/// Sign a token the way the identity provider would.
///
/// Used by tests and local tooling; production tokens come from the
/// provider itself.
pub fn generate_access_token(
    subject: &str,
    permissions: &[&str],
    ttl_secs: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = IssuedClaims {
        sub: subject,
        permissions,
        exp: now + ttl_secs,
        iat: now,
        aud: config.audience.as_deref(),
        iss: config.issuer.as_deref(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}
