use std::str::FromStr;

use anyhow::{Context, Result};

use crate::recommendation::engine::ScoringWeights;

/// Seeded demo accounts carry this uid prefix and never get recommendations.
pub const DEFAULT_SYNTHETIC_USER_PREFIX: &str = "fake_firebase_uid_";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub synthetic_user_prefix: String,
    pub scoring: ScoringWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ScoringWeights::default();

        Ok(Config {
            database_url: lookup("DATABASE_URL")
                .context("Required environment variable 'DATABASE_URL' is not set")?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            synthetic_user_prefix: lookup("SYNTHETIC_USER_PREFIX")
                .unwrap_or_else(|| DEFAULT_SYNTHETIC_USER_PREFIX.to_string()),
            scoring: ScoringWeights {
                skill_match_points: parse_or(
                    &lookup,
                    "RECO_SKILL_MATCH_POINTS",
                    defaults.skill_match_points,
                )?,
                experience_met_points: parse_or(
                    &lookup,
                    "RECO_EXPERIENCE_MET_POINTS",
                    defaults.experience_met_points,
                )?,
                experience_near_points: parse_or(
                    &lookup,
                    "RECO_EXPERIENCE_NEAR_POINTS",
                    defaults.experience_near_points,
                )?,
                max_results: parse_or(&lookup, "RECO_MAX_RESULTS", defaults.max_results)?,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
