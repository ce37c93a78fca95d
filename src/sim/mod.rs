//! Deterministic simulation module
//!
//! All motion and collision logic lives here. This module must stay pure and
//! deterministic:
//! - One step per display frame
//! - Seeded RNG only
//! - Stable iteration order (population index)
//! - No rendering, audio or platform dependencies

pub mod circle;
pub mod collision;
pub mod geometry;
pub mod particle;
pub mod scene;
pub mod state;
pub mod tick;

pub use circle::{Circle, Color};
pub use collision::{
    CollisionEffects, circles_collide, resolve_against_later, resolve_all, resolve_collision,
    separate_circles,
};
pub use geometry::{center_distance, overlap, separation_axis};
pub use particle::{Particle, ParticleSystem};
pub use scene::generate_scene;
pub use state::{SimEvent, SimState, SimStats};
pub use tick::{FrameObserver, NoOpFrameObserver, tick};
