//! Simulation settings
//!
//! Loaded from a JSON file by the host; every field falls back to the
//! reference constants when missing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/// Playfield geometry, timing and RNG seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width (pixels)
    pub width: f32,
    /// Playfield height (pixels)
    pub height: f32,
    /// Side length of a body segment
    pub segment_size: f32,
    /// Gap between consecutive segments
    pub segment_spacing: f32,
    /// Food radius
    pub food_radius: f32,
    /// Seconds between ticks
    pub tick_time: f32,
    /// Random samples before the exhaustive free-cell scan
    pub max_placement_attempts: u32,
    /// Food placement seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            segment_size: SEGMENT_SIZE,
            segment_spacing: SEGMENT_SPACING,
            food_radius: FOOD_RADIUS,
            tick_time: TICK_TIME,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the geometry describes a usable grid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.segment_size.is_nan() || self.segment_size <= 0.0 || self.segment_spacing < 0.0 {
            return Err(SettingsError::Invalid("segment size must be positive"));
        }
        if self.food_radius.is_nan() || self.food_radius <= 0.0 {
            return Err(SettingsError::Invalid("food radius must be positive"));
        }
        if self.tick_time.is_nan() || self.tick_time <= 0.0 {
            return Err(SettingsError::Invalid("tick time must be positive"));
        }
        if self.max_placement_attempts == 0 {
            return Err(SettingsError::Invalid("placement attempts must be non-zero"));
        }
        let stride = self.stride();
        for extent in [self.width, self.height] {
            if extent < stride {
                return Err(SettingsError::Invalid("playfield smaller than one cell"));
            }
            if (extent / stride).fract() != 0.0 {
                return Err(SettingsError::Invalid(
                    "playfield extents must be a multiple of the stride",
                ));
            }
        }
        if self.cols() as u64 * self.rows() as u64 > MAX_GRID_CELLS {
            return Err(SettingsError::Invalid("playfield has too many cells"));
        }
        Ok(())
    }

    /// Distance a segment covers each tick
    #[inline]
    pub fn stride(&self) -> f32 {
        self.segment_size + self.segment_spacing
    }

    /// Grid columns
    pub fn cols(&self) -> u32 {
        (self.width / self.stride()) as u32
    }

    /// Grid rows
    pub fn rows(&self) -> u32 {
        (self.height / self.stride()) as u32
    }

    /// Longest chain that fits in the playfield
    pub fn capacity(&self) -> usize {
        self.cols() as usize * self.rows() as usize
    }

    /// Max centre distance at which a segment touches food
    pub fn collision_threshold(&self) -> f32 {
        (self.food_radius + self.segment_size / 2.0) / 2.0
    }
}
