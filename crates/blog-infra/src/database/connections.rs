use std::env;
use std::str::FromStr;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Pool ceiling and idle floor sized for a small service: the pool defends
/// against connection leaks and stale server-side state, not genuine load.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 5;

/// Maximum lifetime of a pooled connection before forced recycling.
const MAX_CONN_LIFETIME: Duration = Duration::from_secs(30 * 60);

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
        }
    }

    /// Read connection settings from the environment.
    ///
    /// `DATABASE_URL` wins when set (hosted platforms provide it); otherwise
    /// the URL is assembled from the individual `DB_*` variables with local
    /// development defaults.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let user = env_or("DB_USER", "postgres");
            let pass = env_or("DB_PASS", "");
            let host = env_or("DB_HOST", "localhost");
            let port = env_or("DB_PORT", "5432");
            let name = env_or("DB_NAME", "blog");
            format!("postgres://{user}:{pass}@{host}:{port}/{name}")
        });

        let mut config = Self::new(url);
        if let Some(max) = env_parse("DB_MAX_CONNECTIONS") {
            config.max_connections = max;
        }
        if let Some(min) = env_parse("DB_MIN_CONNECTIONS") {
            config.min_connections = min;
        }
        config
    }
}

/// Open the connection pool and verify liveness up front so that an
/// unreachable database fails the boot immediately instead of surfacing on
/// the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(MAX_CONN_LIFETIME)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    db.ping().await?;

    tracing::info!(pool = config.max_connections, "database connected");
    Ok(db)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
