//! Error types for the game.
//!
//! Gameplay itself never fails; the only fallible path is reading
//! `assets/game.toml`.  [`crate::config::ConfigPlugin`] logs any
//! [`GameError`] and falls back to the compiled defaults.

use std::fmt;

/// Top-level error enum.
#[derive(Debug)]
pub enum GameError {
    /// The configuration file is not valid TOML or has a mistyped field.
    ConfigParse(toml::de::Error),

    /// A configuration value is outside the range the game can run with.
    InvalidConfig {
        /// Name of the offending key (as written in `game.toml`).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        requirement: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigParse(e) => write!(f, "failed to parse game config: {}", e),
            GameError::InvalidConfig {
                name,
                value,
                requirement,
            } => write!(
                f,
                "config value '{}' = {} is invalid (must be {})",
                name, value, requirement
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigParse(e) => Some(e),
            GameError::InvalidConfig { .. } => None,
        }
    }
}

impl From<toml::de::Error> for GameError {
    fn from(e: toml::de::Error) -> Self {
        GameError::ConfigParse(e)
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is not finite and strictly positive.
pub fn require_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            requirement: "finite and > 0",
        })
    }
}

/// Returns an error if `value` is negative or not finite.
pub fn require_non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            requirement: "finite and >= 0",
        })
    }
}
