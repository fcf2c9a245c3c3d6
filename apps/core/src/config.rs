//! Environment configuration.
//!
//! Values come from process environment variables prefixed `THEORYCOACH_`,
//! optionally seeded from a `.env` file. Without a primary endpoint the
//! tutor never calls out and answers from its templates alone.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use validator::Validate;

use crate::brain::Language;
use crate::error::AppError;

const ENV_PREFIX: &str = "THEORYCOACH_";

/// Default bound on a single inference attempt.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
/// Default number of turns kept in the rolling history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// Bunyan-style JSON lines.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("unknown log format '{}'", other))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Runtime configuration for a tutor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TutorConfig {
    /// Primary text-generation endpoint; `None` disables the external call.
    pub primary_endpoint: Option<Url>,
    /// Endpoint tried once after the primary fails.
    pub fallback_endpoint: Option<Url>,
    /// Bearer token sent to both endpoints.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    /// Bound on each endpoint attempt, in seconds.
    #[validate(range(min = 1, max = 120))]
    pub timeout_secs: u64,
    /// Turns kept in the rolling history.
    #[validate(range(min = 1, max = 1000))]
    pub history_capacity: usize,
    /// Reply language used when neither the caller nor detection decides.
    pub language: Language,
    pub log_format: LogFormat,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            primary_endpoint: None,
            fallback_endpoint: None,
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            language: Language::En,
            log_format: LogFormat::Pretty,
        }
    }
}

impl TutorConfig {
    /// Loads `.env` from the working directory (if any), then reads the environment.
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenv::dotenv() {
            debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads a specific `.env` file, then reads the environment.
    pub fn from_env_file(path: &Path) -> Result<Self, AppError> {
        dotenv::from_path(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. The lookup receives
    /// full variable names, e.g. `THEORYCOACH_LANGUAGE`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        let config = Self {
            primary_endpoint: get("PRIMARY_ENDPOINT").map(|v| parse_endpoint(&v)).transpose()?,
            fallback_endpoint: get("FALLBACK_ENDPOINT").map(|v| parse_endpoint(&v)).transpose()?,
            api_token: get("API_TOKEN"),
            timeout_secs: get("TIMEOUT_SECS")
                .map(|v| parse_number("TIMEOUT_SECS", &v))
                .transpose()?
                .unwrap_or(defaults.timeout_secs),
            history_capacity: get("HISTORY_CAPACITY")
                .map(|v| parse_number("HISTORY_CAPACITY", &v))
                .transpose()?
                .unwrap_or(defaults.history_capacity),
            language: get("LANGUAGE")
                .map(|v| v.parse::<Language>())
                .transpose()?
                .unwrap_or(defaults.language),
            log_format: get("LOG_FORMAT")
                .map(|v| v.parse::<LogFormat>())
                .transpose()?
                .unwrap_or(defaults.log_format),
        };

        config.validate()?;

        if config.fallback_endpoint.is_some() && config.primary_endpoint.is_none() {
            warn!("Fallback endpoint configured without a primary; external calls stay disabled");
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn external_enabled(&self) -> bool {
        self.primary_endpoint.is_some()
    }
}

fn parse_endpoint(value: &str) -> Result<Url, AppError> {
    let url = Url::parse(value)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::Config(format!(
            "endpoint '{}' must use http or https, not {}",
            value, scheme
        ))),
    }
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value
        .parse()
        .map_err(|_| AppError::Config(format!("{}{} is not a number: '{}'", ENV_PREFIX, name, value)))
}
