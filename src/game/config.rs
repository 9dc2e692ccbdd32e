//! Setup-time validation of tuning values.
//!
//! Numeric tuning is checked once when the game is assembled; systems assume
//! validated values and never re-check them per tick.

use thiserror::Error;

/// A tuning value that cannot drive the simulation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("wave {wave}: spawn interval must be greater than zero (got {value})")]
    WaveInterval { wave: usize, value: f32 },

    #[error("wave {wave}: post-wave duration must not be negative (got {value})")]
    WaveDuration { wave: usize, value: f32 },

    #[error("level growth multiplier must be greater than 1 (got {0})")]
    LevelGrowth(f32),

    #[error("experience to next level must be greater than zero")]
    ExperienceThreshold,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reject negative values (zero allowed).
pub fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value < 0.0 || value.is_nan() {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

/// Reject zero and negative values.
pub fn positive(field: &'static str, value: f32) -> Result<()> {
    if value <= 0.0 || value.is_nan() {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

/// Reject values outside `min..=max`.
pub fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
