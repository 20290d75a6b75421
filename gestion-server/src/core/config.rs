/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DB_PATH | gestionAdministrativa.db | SQLite database file |
/// | HTTP_PORT | 5001 | HTTP API port |
/// | CORS_ORIGIN | http://localhost:5173 | Allowed cross-origin frontend |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (unset) | directory for daily-rolling log files |
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub db_path: String,
    /// HTTP API port
    pub http_port: u16,
    /// Origin allowed to call the `/api/*` routes cross-origin
    pub cors_origin: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("DB_PATH")
                .unwrap_or_else(|_| "gestionAdministrativa.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the storage path and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(db_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.db_path = db_path.into();
        config.http_port = http_port;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
