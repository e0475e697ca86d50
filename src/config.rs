use std::{env, fmt, num::NonZeroU32, str::FromStr};

use tracing::{info, warn};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => Err(format!("unknown store kind '{other}'")),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Postgres => write!(f, "postgres"),
            StoreKind::Memory => write!(f, "memory"),
        }
    }
}

const DEFAULT_RATE_LIMIT_PER_MINUTE: NonZeroU32 = match NonZeroU32::new(1000) {
    Some(limit) => limit,
    None => NonZeroU32::MIN,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub allowed_origins: Vec<String>,
    pub rate_limit_per_minute: NonZeroU32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            store: StoreKind::Postgres,
            database_url: None,
            max_connections: 5,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
        }
    }
}

impl Config {
    /// Unset or unparsable variables keep their default, with a log line.
    pub fn load() -> Self {
        let defaults = Self::default();

        Self {
            port: try_load("PORT", defaults.port),
            store: try_load("MOVIE_STORE", defaults.store),
            database_url: env::var("DATABASE_CONNECTION_STRING").ok(),
            max_connections: try_load("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
            rate_limit_per_minute: try_load(
                "RATE_LIMIT_PER_MINUTE",
                defaults.rate_limit_per_minute,
            ),
        }
    }

    pub fn database_url(&self) -> Result<&str, AppError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| AppError::EnvError("DATABASE_CONNECTION_STRING must be set".into()))
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
        default
    })
}
