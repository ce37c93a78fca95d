//! Simulation state
//!
//! Everything the frame loop mutates lives in [`SimState`]: the ordered circle
//! population, the live particles, the seeded RNG and pending events.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::circle::Circle;
use super::collision::{CollisionEffects, resolve_all};
use super::particle::ParticleSystem;
use crate::config::SimConfig;

/// Something the host should react to (sound, logging)
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// Circles `a` and `b` (population indices, a < b) collided
    Collision { a: usize, b: usize, point: Vec2 },
    /// A new population replaced the old one
    SceneGenerated { count: usize },
}

/// Running counters for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub frames: u64,
    pub collisions: u64,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Session configuration (read-only once created)
    pub config: SimConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Circles in stable index order; the order drives pair iteration
    pub circles: Vec<Circle>,
    /// Live particles
    pub particles: ParticleSystem,
    pub stats: SimStats,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<SimEvent>,
}

impl SimState {
    /// Create an empty state with the given seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            circles: Vec::new(),
            particles: ParticleSystem::new(),
            stats: SimStats::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Run one collision pass over every pair without moving anything.
    /// Returns the number of colliding pairs resolved.
    pub fn resolve_collisions(&mut self) -> usize {
        let mut fx = CollisionEffects {
            particles: &mut self.particles,
            events: &mut self.events,
            rng: &mut self.rng,
            burst_size: self.config.burst_size,
        };
        let hits = resolve_all(&mut self.circles, &mut fx);
        self.stats.collisions += hits as u64;
        hits
    }
}
