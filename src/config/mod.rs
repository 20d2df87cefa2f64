//! Configuration management for the server.
//!
//! All runtime configuration comes from environment variables (with `.env`
//! loading handled in `main`). The configuration is read once at startup into
//! an [`AppConfig`] and shared behind an `Arc`; nothing reads the environment
//! after boot.

/// Database connection and table creation
pub mod database;

use crate::errors::{Error, Result};
use tracing::warn;

/// Default JWT secret matching the original deployment's fallback. Fine for
/// local development, unusable for anything real.
const DEFAULT_JWT_SECRET: &str = "your-secret-key-here";

/// Process-wide configuration, injected at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SeaORM connection URL (SQLite file by default)
    pub database_url: String,
    /// Shared secret for signing and verifying bearer tokens
    pub jwt_secret: String,
    /// TCP port the HTTP server binds to
    pub port: u16,
    /// Solana JSON-RPC endpoint for balance and transaction lookups
    pub solana_rpc_url: String,
}

/// Loads the application configuration from the environment.
///
/// `DATABASE_URL`, `PORT`, and `SOLANA_RPC_URL` fall back to development
/// defaults when unset; a missing `JWT_SECRET` falls back too but logs a
/// warning since every issued token is then signed with a publicly known
/// secret.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/streamflow.sqlite?mode=rwc".to_string());

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        warn!("JWT_SECRET not set, falling back to the development default");
        DEFAULT_JWT_SECRET.to_string()
    });

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|e| Error::Config {
            message: format!("PORT is not a valid port number: {e}"),
        })?,
        Err(_) => 3001,
    };

    let solana_rpc_url = std::env::var("SOLANA_RPC_URL")
        .unwrap_or_else(|_| "https://api.devnet.solana.com".to_string());

    Ok(AppConfig {
        database_url,
        jwt_secret,
        port,
        solana_rpc_url,
    })
}
