use std::{env, net::SocketAddr, str::FromStr};

use crate::errors::AppError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.chess.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";
pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_SCAN_CAP: usize = 250;
pub const DEFAULT_RECENT_GAMES: usize = 6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub workers: usize,
    pub scan_cap: usize,
    pub recent_games: usize,
    pub timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| AppError::InvalidConfig("DATABASE_URL is not set".to_string()))?;
        let api_base_url = lookup("CHESS_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let settings = Self {
            database_url,
            api_base_url,
            bind_addr: parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            workers: parse_or(&lookup, "AGGREGATION_WORKERS", Some(DEFAULT_WORKERS))?,
            scan_cap: parse_or(&lookup, "OPENING_SCAN_CAP", Some(DEFAULT_SCAN_CAP))?,
            recent_games: parse_or(&lookup, "RECENT_GAMES_LIMIT", Some(DEFAULT_RECENT_GAMES))?,
            timeout_secs: parse_or(&lookup, "HTTP_TIMEOUT_SECS", Some(DEFAULT_TIMEOUT_SECS))?,
        };
        if settings.workers == 0 {
            return Err(AppError::InvalidConfig(
                "AGGREGATION_WORKERS must be at least 1".to_string(),
            ));
        }
        Ok(settings)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: Option<T>) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::InvalidConfig(format!("{} has an invalid value `{}`", key, raw))
        }),
        None => default.ok_or_else(|| AppError::InvalidConfig(format!("{} is not set", key))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let settings =
            Settings::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.workers, 10);
        assert_eq!(settings.scan_cap, 250);
        assert_eq!(settings.recent_games, 6);
        assert_eq!(settings.bind_addr.port(), 3001);
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://stats.db"),
            ("CHESS_API_BASE_URL", "http://localhost:9000/"),
            ("AGGREGATION_WORKERS", "4"),
            ("OPENING_SCAN_CAP", "50"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ]))
        .unwrap();
        assert_eq!(settings.api_base_url, "http://localhost:9000");
        assert_eq!(settings.workers, 4);
        assert_eq!(settings.scan_cap, 50);
        assert_eq!(settings.bind_addr.port(), 8080);
    }

    #[test]
    fn rejects_bad_values() {
        let missing_db = Settings::from_lookup(lookup(&[]));
        assert!(matches!(missing_db, Err(AppError::InvalidConfig(_))));
        let zero_workers = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("AGGREGATION_WORKERS", "0"),
        ]));
        assert!(matches!(zero_workers, Err(AppError::InvalidConfig(_))));
        let garbage = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("OPENING_SCAN_CAP", "lots"),
        ]));
        assert!(matches!(garbage, Err(AppError::InvalidConfig(_))));
    }
}
