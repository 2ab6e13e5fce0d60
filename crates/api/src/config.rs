use crate::auth::jwt::JwtConfig;

/// Default number of records per page when `?page=` is supplied.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Server configuration loaded from environment variables.
///
/// All fields except the token secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Records per page for paginated listings (default: `10`).
    pub page_size: u32,
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Bearer token verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `3000`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `PAGE_SIZE`            | `10`        |
    /// | `DATABASE_URL`         | unset       |
    ///
    /// See [`JwtConfig::from_env`] for the `AUTH_*` variables.
    ///
    /// # Panics
    ///
    /// Panics on unparseable numbers or a zero page size.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let page_size: u32 = std::env::var("PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .expect("PAGE_SIZE must be a valid u32");
        assert!(page_size > 0, "PAGE_SIZE must be greater than zero");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            request_timeout_secs,
            page_size,
            database_url,
            jwt,
        }
    }
}
