use std::net::{IpAddr, SocketAddr};

use crate::error::ConfigError;
use crate::store::sqlite::MEMORY_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub store: StoreKind,
    pub database_url: String,
    pub cors_origin: String,
}

impl Config {
    /// Reads the process environment. Call `dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::Invalid {
                    key: "HOST",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::Invalid {
                    key: "PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => 3000,
        };

        let store = match lookup("TODO_STORE").as_deref() {
            None | Some("memory") => StoreKind::Memory,
            Some("sqlite") => StoreKind::Sqlite,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "TODO_STORE",
                    value: other.to_string(),
                    reason: "expected `memory` or `sqlite`".to_string(),
                })
            }
        };

        Ok(Config {
            host,
            port,
            store,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| MEMORY_URL.to_string()),
            cors_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
