// ABOUTME: Planner configuration loaded from environment variables
// ABOUTME: Suggestion tuning, placeholder title, and deployment mode with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! Environment-based configuration for the planning engines

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::types::Environment;
use crate::constants::env_config;
use crate::constants::scheduling::{
    DEFAULT_SUGGESTION_LIMIT, DEFAULT_SUGGESTION_WINDOW, UNKNOWN_SONG_TITLE,
};
use crate::errors::{AppError, AppResult};

/// Tunables for the scheduling engines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum songs returned by the suggestion engine
    pub suggestion_limit: usize,
    /// How many recent set-lists feed suggestions
    pub suggestion_window: usize,
    /// Title shown for entries whose song is gone from the catalog
    pub unknown_song_title: String,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            suggestion_window: DEFAULT_SUGGESTION_WINDOW,
            unknown_song_title: UNKNOWN_SONG_TITLE.to_owned(),
            environment: Environment::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults; unparseable values are logged
    /// and replaced by the default.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the resulting configuration
    /// fails [`PlannerConfig::validate`].
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            suggestion_limit: env_parse_or(env_config::SUGGESTION_LIMIT, defaults.suggestion_limit),
            suggestion_window: env_parse_or(
                env_config::SUGGESTION_WINDOW,
                defaults.suggestion_window,
            ),
            unknown_song_title: env::var(env_config::UNKNOWN_SONG_TITLE)
                .ok()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(defaults.unknown_song_title),
            environment: env::var(env_config::ENVIRONMENT)
                .map(|raw| Environment::from_str_or_default(&raw))
                .unwrap_or_default(),
        };
        config.validate()?;

        info!(
            environment = %config.environment,
            suggestion_limit = config.suggestion_limit,
            suggestion_window = config.suggestion_window,
            "Planner configuration loaded"
        );
        Ok(config)
    }

    /// Check internal consistency
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` when the suggestion window is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.suggestion_window == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_config::SUGGESTION_WINDOW
            )));
        }
        Ok(())
    }
}

fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    env::var(key).map_or(default, |raw| {
        raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, fallback = %default, "Invalid value, using default");
            default
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.suggestion_window, 8);
        assert_eq!(config.unknown_song_title, "Unknown");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = PlannerConfig {
            suggestion_window: 0,
            ..PlannerConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().code, ErrorCode::ConfigInvalid);
    }
}
