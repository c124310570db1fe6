use std::path::{Path, PathBuf};

use axum::http::HeaderValue;

/// The server always listens on this port.
pub const PORT: u16 = 8000;

/// File name of the database inside the data directory.
const DATABASE_FILE: &str = "movie_catalog.db";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port, fixed at [`PORT`].
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Directory holding the optional seed files and the default database.
    pub data_dir: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                  |
    /// |------------------------|------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                |
    /// | `DATABASE_URL`         | `sqlite:<data dir>/movie_catalog.db`     |
    /// | `SEED_DATA_DIR`        | `<project root>/data`                    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(|key| std::env::var(key).ok(), &cwd)
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// `cwd` is the starting point for project-root discovery.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let data_dir = lookup("SEED_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| find_project_root(cwd).join("data"));

        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| format!("sqlite:{}", data_dir.join(DATABASE_FILE).display()));

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    expected: "a list of valid origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                expected: "a non-negative integer",
                value: raw,
            })?,
            None => 30,
        };

        Ok(Self {
            host,
            port: PORT,
            database_url,
            data_dir,
            cors_origins,
            request_timeout_secs,
        })
    }
}

/// Nearest ancestor of `start` (inclusive) that contains a `Cargo.toml`.
///
/// Falls back to `start` itself when no manifest is found.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join("Cargo.toml").is_file())
        .unwrap_or(start)
        .to_path_buf()
}
