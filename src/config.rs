//! Simulation configuration
//!
//! Every tunable constant lives in [`SimConfig`]. Defaults come from
//! [`crate::consts`]; the host page may override any subset of fields with a
//! JSON document, which is validated before use.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors produced while loading or validating a [`SimConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The config source could not be read.
    Read(String),
    /// The JSON document could not be parsed.
    Parse(String),
    /// Canvas dimensions must be positive and finite.
    InvalidCanvas { width: f32, height: f32 },
    /// Radius range must satisfy 0 < min < max.
    InvalidRadiusRange { min: f32, max: f32 },
    /// The largest circle must fit inside the canvas.
    RadiusExceedsCanvas { max_radius: f32 },
    /// Placement margin must be non-negative.
    NegativeMargin(f32),
    /// At least one placement attempt is required.
    ZeroPlacementAttempts,
    /// Particle fade step must be in (0, 1].
    InvalidFade(f32),
    /// Particle radius must be positive.
    InvalidParticleRadius(f32),
    /// Volume must be in [0, 1].
    InvalidVolume(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(msg) => write!(f, "could not read config: {}", msg),
            ConfigError::Parse(msg) => write!(f, "invalid config JSON: {}", msg),
            ConfigError::InvalidCanvas { width, height } => {
                write!(f, "canvas must be positive, got {}x{}", width, height)
            }
            ConfigError::InvalidRadiusRange { min, max } => {
                write!(f, "radius range must satisfy 0 < min < max, got [{}, {})", min, max)
            }
            ConfigError::RadiusExceedsCanvas { max_radius } => {
                write!(f, "circles of radius {} do not fit the canvas", max_radius)
            }
            ConfigError::NegativeMargin(m) => write!(f, "placement margin {} is negative", m),
            ConfigError::ZeroPlacementAttempts => {
                write!(f, "at least one placement attempt is required")
            }
            ConfigError::InvalidFade(v) => write!(f, "particle fade {} must be in (0, 1]", v),
            ConfigError::InvalidParticleRadius(r) => {
                write!(f, "particle radius {} must be positive", r)
            }
            ConfigError::InvalidVolume(v) => write!(f, "volume {} must be in [0, 1]", v),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Session configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Canvas ===
    pub width: f32,
    pub height: f32,

    // === Scene generation ===
    pub min_radius: f32,
    pub max_radius: f32,
    pub placement_margin: f32,
    pub max_placement_attempts: u32,
    /// When placement attempts run out, keep the last (overlapping) candidate.
    /// If false the circle is skipped and the scene ends up smaller.
    pub accept_overlap_on_exhaustion: bool,

    // === Motion ===
    /// Clamp circles back inside the canvas after each step
    pub clamp_to_bounds: bool,

    // === Particles ===
    pub burst_size: usize,
    pub particle_fade: f32,
    pub particle_radius: f32,

    // === Drawing ===
    pub glow_blur: f32,
    pub outline_width: f32,
    pub label_font: String,

    // === Audio ===
    pub collision_volume: f32,
    /// Scales every cue (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            placement_margin: PLACEMENT_MARGIN,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            accept_overlap_on_exhaustion: true,

            clamp_to_bounds: true,

            burst_size: BURST_SIZE,
            particle_fade: PARTICLE_FADE,
            particle_radius: PARTICLE_RADIUS,

            glow_blur: GLOW_BLUR,
            outline_width: OUTLINE_WIDTH,
            label_font: LABEL_FONT.to_string(),

            collision_volume: COLLISION_VOLUME,
            master_volume: 1.0,
            muted: false,
        }
    }
}

impl SimConfig {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Canvas size as a vector
    pub fn bounds(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width, self.height)
    }

    /// Check every field for values the simulation cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if !canvas_ok {
            return Err(ConfigError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.min_radius > 0.0 && self.min_radius < self.max_radius) {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        // Placement samples centers from [r, size - r]
        if 2.0 * self.max_radius >= self.width.min(self.height) {
            return Err(ConfigError::RadiusExceedsCanvas {
                max_radius: self.max_radius,
            });
        }
        if self.placement_margin < 0.0 {
            return Err(ConfigError::NegativeMargin(self.placement_margin));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        if !(self.particle_fade > 0.0 && self.particle_fade <= 1.0) {
            return Err(ConfigError::InvalidFade(self.particle_fade));
        }
        if !(self.particle_radius > 0.0) {
            return Err(ConfigError::InvalidParticleRadius(self.particle_radius));
        }
        for volume in [self.collision_volume, self.master_volume] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::InvalidVolume(volume));
            }
        }
        Ok(())
    }
}
