//! Scene configuration supplied by the host page.
//!
//! The host may pass a JSON object to `start`; every field is optional and
//! missing fields take their defaults. Unknown fields are rejected so that a
//! typo in the page does not silently fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_STAR_COUNT, MAX_STAR_COUNT};
use crate::shape::CONSTELLATIONS;

/// Errors produced while loading a [`SceneConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON or did not match the schema.
    #[error("failed to parse scene config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `startShape` does not name a known constellation.
    #[error("start shape {index} out of range (have {count} constellations)")]
    ShapeOutOfRange { index: usize, count: usize },
    /// `starCount` exceeds [`MAX_STAR_COUNT`].
    #[error("star count {0} exceeds maximum of {max}", max = MAX_STAR_COUNT)]
    TooManyStars(usize),
}

/// Tunables for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneConfig {
    /// Number of background stars.
    pub star_count: usize,
    /// Fixed RNG seed. When absent the host picks one at random.
    pub seed: Option<u64>,
    /// Index of the constellation shown first.
    pub start_shape: usize,
    /// Hide the system cursor over the canvas.
    pub hide_cursor: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            seed: None,
            start_shape: 0,
            hide_cursor: true,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and the validation
    /// errors of [`SceneConfig::validate`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_shape` is not a valid constellation index or
    /// `star_count` is above [`MAX_STAR_COUNT`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_shape >= CONSTELLATIONS.len() {
            return Err(ConfigError::ShapeOutOfRange { index: self.start_shape, count: CONSTELLATIONS.len() });
        }
        if self.star_count > MAX_STAR_COUNT {
            return Err(ConfigError::TooManyStars(self.star_count));
        }
        Ok(())
    }
}
