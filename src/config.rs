//! Runtime configuration
//!
//! Everything is read from environment variables; nothing is required except
//! `GEMINI_API_KEY` for the AI-backed tools.

use std::path::PathBuf;

use thiserror::Error;

pub const DATABASE_PATH_ENV: &str = "MACROLOG_DATABASE_PATH";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_ENV: &str = "MACROLOG_GEMINI_MODEL";
pub const TREND_DAYS_ENV: &str = "MACROLOG_TREND_DAYS";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TREND_DAYS: u32 = 30;

/// Upper bound for the analytics window; history queries never look further back
pub const MAX_TREND_DAYS: u32 = 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number between 1 and {max}, got {value:?}")]
    InvalidTrendDays { var: &'static str, value: String, max: u32 },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub trend_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_path = std::env::var(DATABASE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());

        let gemini_api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());

        let gemini_model = std::env::var(GEMINI_MODEL_ENV)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let trend_days = match std::env::var(TREND_DAYS_ENV) {
            Ok(raw) => parse_trend_days(&raw)?,
            Err(_) => DEFAULT_TREND_DAYS,
        };

        Ok(Self {
            database_path,
            gemini_api_key,
            gemini_model,
            trend_days,
        })
    }
}

fn parse_trend_days(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if (1..=MAX_TREND_DAYS).contains(&n) => Ok(n),
        _ => Err(ConfigError::InvalidTrendDays {
            var: TREND_DAYS_ENV,
            value: raw.to_string(),
            max: MAX_TREND_DAYS,
        }),
    }
}

/// `<project root>/data/macrolog.db`, where the project root is found by walking up
/// from `target/{debug,release}` when running a cargo-built binary.
pub fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(root) = path.parent().and_then(|target| target.parent()) {
            path = root.to_path_buf();
        }
    }

    path.push("data");
    path.push("macrolog.db");
    path
}
