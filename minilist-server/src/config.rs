//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;

/// Default per-collection row cap for /load.
const DEFAULT_LOAD_LIMIT: i64 = 100;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Postgres connection string. Absent means the service runs
    /// unconfigured and answers 500 to every data request.
    pub database_url: Option<String>,

    /// Maximum tasks/notes returned per collection on /load.
    pub load_limit: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database_url: None,
            load_limit: DEFAULT_LOAD_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// Recognized variables: `DATABASE_URL`, `MINILIST_BIND`,
    /// `MINILIST_LOAD_LIMIT`. Unparsable values fall back to defaults
    /// with a warning rather than aborting startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(bind) = env::var("MINILIST_BIND") {
            match bind.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(err) => tracing::warn!("invalid MINILIST_BIND '{}': {}", bind, err),
            }
        }

        config.database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        if let Ok(limit) = env::var("MINILIST_LOAD_LIMIT") {
            match limit.parse() {
                Ok(n) => config.load_limit = n,
                Err(err) => tracing::warn!("invalid MINILIST_LOAD_LIMIT '{}': {}", limit, err),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.load_limit, 100);
        assert!(config.database_url.is_none());
    }
}
