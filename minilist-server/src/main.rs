//! minilist-server entry point
//!
//! Environment:
//!   DATABASE_URL           Postgres connection string (required for persistence)
//!   MINILIST_BIND          bind address (default 127.0.0.1:8080)
//!   MINILIST_LOAD_LIMIT    per-collection row cap on /load (default 100)
//!   RUST_LOG               log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use minilist_server::config::ServerConfig;
use minilist_server::http::server::run_server;
use minilist_server::{db, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = ServerConfig::from_env();

    let state = match config.database_url.clone() {
        Some(url) => {
            let pool = db::pool::create_pool(&url)?;
            // Tables usually already exist; an unreachable store at boot is
            // not fatal, requests degrade per the endpoint policies.
            if let Err(err) = db::migrations::run(&pool).await {
                tracing::warn!("migrations skipped: {}", err);
            }
            AppState::new(pool, config)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; data requests will answer 500");
            AppState::unconfigured(config)
        }
    };

    run_server(state).await?;
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
