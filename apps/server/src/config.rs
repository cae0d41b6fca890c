use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

/// Connection parameters for the PostgreSQL server holding the `goals` table.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    /// libpq connection URL with user, password and database name percent-encoded.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            urlencoding::encode(&self.name)
        )
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub static_dir: String,
    pub app_version: String,
    pub db: DatabaseConfig,
    pub db_checkout_timeout: Duration,
}

pub const DEFAULT_APP_VERSION: &str = "0.0.0";
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

impl Config {
    /// Reads the environment (and `.env` when present) once at startup.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let port = env_or("DB_PORT", "5432");
        let db = DatabaseConfig {
            username: env_or("DB_USERNAME", "postgres"),
            password: env_or("DB_PASSWORD", ""),
            host: env_or("DB_HOST", "localhost"),
            port: port
                .trim()
                .parse()
                .with_context(|| format!("Invalid DB_PORT '{port}'"))?,
            name: env_or("DB_NAME", "goals"),
        };
        Ok(Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: STATIC_DIR.to_string(),
            app_version: env_or("APP_VERSION", DEFAULT_APP_VERSION),
            db,
            db_checkout_timeout: Duration::from_secs(30),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
