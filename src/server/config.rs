use std::{fmt::Display, str::FromStr};

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "*";
const DEFAULT_CLEANUP_SCHEDULE: &str = "0 */10 * * * *";

/// How starship and cargo names are compared for uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMatching {
    #[default]
    Exact,
    CaseInsensitive,
}

/// Requests per minute allowed per client IP for each route group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimits {
    pub default_per_minute: u32,
    pub starship_creation_per_minute: u32,
    pub loading_per_minute: u32,
    pub history_per_minute: u32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            default_per_minute: 100,
            starship_creation_per_minute: 20,
            loading_per_minute: 30,
            history_per_minute: 200,
        }
    }
}

/// Settings of the periodic maintenance sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceSettings {
    /// Shipment history older than this is purged.
    pub history_retention: Duration,
    /// A loading starship whose latest shipment is older than this is released.
    pub stuck_loading_after: Duration,
    /// Six-field cron expression.
    pub schedule: String,
}

impl Default for MaintenanceSettings {
    fn default() -> Self {
        Self {
            history_retention: Duration::days(1),
            stuck_loading_after: Duration::hours(1),
            schedule: DEFAULT_CLEANUP_SCHEDULE.to_string(),
        }
    }
}

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,

    /// Bearer token required on mutating endpoints; `None` disables the check.
    pub api_token: Option<String>,
    pub name_matching: NameMatching,

    pub rate_limits: RateLimits,
    pub maintenance: MaintenanceSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            get("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let name_matching = match get("NAME_MATCH_CASE_INSENSITIVE") {
            Some(value) if parse_bool("NAME_MATCH_CASE_INSENSITIVE", &value)? => {
                NameMatching::CaseInsensitive
            }
            _ => NameMatching::Exact,
        };

        let defaults = RateLimits::default();
        let rate_limits = RateLimits {
            default_per_minute: rate_limit(&get, "RATE_LIMIT_DEFAULT", defaults.default_per_minute)?,
            starship_creation_per_minute: rate_limit(
                &get,
                "RATE_LIMIT_STARSHIP_CREATION",
                defaults.starship_creation_per_minute,
            )?,
            loading_per_minute: rate_limit(&get, "RATE_LIMIT_LOADING", defaults.loading_per_minute)?,
            history_per_minute: rate_limit(&get, "RATE_LIMIT_HISTORY", defaults.history_per_minute)?,
        };

        let history_days: i64 = parse_or(&get, "CLEANUP_HISTORY_DAYS", 1)?;
        let history_retention = Duration::try_days(history_days)
            .filter(|d| *d > Duration::zero())
            .ok_or_else(|| invalid("CLEANUP_HISTORY_DAYS", history_days, "must be a positive number of days"))?;

        let stuck_hours: i64 = parse_or(&get, "STUCK_LOADING_HOURS", 1)?;
        let stuck_loading_after = Duration::try_hours(stuck_hours)
            .filter(|d| *d > Duration::zero())
            .ok_or_else(|| invalid("STUCK_LOADING_HOURS", stuck_hours, "must be a positive number of hours"))?;

        Ok(Self {
            database_url,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
            cors_origins,
            api_token: get("API_TOKEN"),
            name_matching,
            rate_limits,
            maintenance: MaintenanceSettings {
                history_retention,
                stuck_loading_after,
                schedule: get("CLEANUP_SCHEDULE")
                    .unwrap_or_else(|| DEFAULT_CLEANUP_SCHEDULE.to_string()),
            },
        })
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::InvalidEnvVar {
                name: key.to_string(),
                value,
                reason: e.to_string(),
            })
        }
        None => Ok(default),
    }
}

fn rate_limit<G>(get: &G, key: &str, default: u32) -> Result<u32, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let per_minute = parse_or(get, key, default)?;
    if per_minute == 0 {
        return Err(invalid(key, per_minute, "must be at least 1"));
    }
    Ok(per_minute)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "expected a boolean")),
    }
}

fn invalid(key: &str, value: impl Display, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
