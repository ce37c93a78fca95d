//! Circle Burst - bouncing, colliding circles on a canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, particles, scene generation)
//! - `renderer`: Drawing sink abstraction and the Canvas 2D backend
//! - `platform`: Frame loop session with cancellation
//! - `controls`: Control surface input validation
//! - `config`: Runtime configuration
//! - `audio`: Collision sound cue

pub mod audio;
pub mod config;
pub mod controls;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use controls::SceneRequest;

/// Simulation configuration defaults
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 850.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Circle radius range [min, max)
    pub const MIN_RADIUS: f32 = 20.0;
    pub const MAX_RADIUS: f32 = 60.0;

    /// Extra spacing required between circles at spawn
    pub const PLACEMENT_MARGIN: f32 = 5.0;
    /// Placement attempts before accepting an overlapping position
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

    /// Particles spawned per circle per collision
    pub const BURST_SIZE: usize = 10;
    /// Alpha lost by a particle each frame
    pub const PARTICLE_FADE: f32 = 0.02;
    pub const PARTICLE_RADIUS: f32 = 3.0;

    /// Circle glow and outline
    pub const GLOW_BLUR: f32 = 15.0;
    pub const OUTLINE_WIDTH: f32 = 3.0;
    pub const LABEL_FONT: &str = "bold 20px 'Poppins', sans-serif";

    /// Collision click volume (0.0 - 1.0)
    pub const COLLISION_VOLUME: f32 = 0.5;
}
