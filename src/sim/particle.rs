//! Fading collision particles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Color;

/// Alpha values this close above zero count as fully faded. Absorbs the
/// rounding left over from repeated subtraction of the fade step.
const ALPHA_EPSILON: f32 = 1e-4;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Fixed at spawn
    pub pos: Vec2,
    pub color: Color,
    /// Opacity, starts at 1.0 and only decreases
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos,
            color,
            alpha: 1.0,
        }
    }

    /// Fade by one step. May go negative; the owning system prunes.
    pub fn decay(&mut self, fade: f32) {
        self.alpha -= fade;
        if self.alpha < ALPHA_EPSILON {
            self.alpha = self.alpha.min(0.0);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

/// Owns the live particles. A particle leaves only by fading out.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` particles at `pos`
    pub fn spawn_burst(&mut self, pos: Vec2, color: Color, count: usize) {
        self.particles
            .extend(std::iter::repeat_n(Particle::new(pos, color), count));
    }

    /// Decay every particle, hand survivors to `on_live` and drop the rest.
    ///
    /// Returns the number of particles removed.
    pub fn tick(&mut self, fade: f32, mut on_live: impl FnMut(&Particle)) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.decay(fade);
            if p.is_alive() {
                on_live(p);
                true
            } else {
                false
            }
        });
        before - self.particles.len()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARTICLE_FADE;

    #[test]
    fn test_particle_fades_out_in_fifty_steps() {
        let mut p = Particle::new(Vec2::ZERO, Color::from_hue(10.0));
        for _ in 0..49 {
            p.decay(PARTICLE_FADE);
            assert!(p.is_alive());
        }
        p.decay(PARTICLE_FADE);
        assert!(p.alpha <= 0.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn test_decay_is_unbounded() {
        let mut p = Particle::new(Vec2::ZERO, Color::from_hue(10.0));
        p.decay(0.6);
        p.decay(0.6);
        assert!((p.alpha - (-0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_tick_prunes_all_dead_in_one_pass() {
        let mut system = ParticleSystem::new();
        system.spawn_burst(Vec2::ZERO, Color::from_hue(0.0), 3);
        // Fresh particles interleaved with nearly dead ones
        for p in system.particles.iter_mut().step_by(2) {
            p.alpha = 0.01;
        }
        system.spawn_burst(Vec2::ONE, Color::from_hue(90.0), 2);

        let mut drawn = 0;
        let removed = system.tick(PARTICLE_FADE, |_| drawn += 1);
        assert_eq!(removed, 2);
        assert_eq!(drawn, 3);
        assert_eq!(system.len(), 3);
        assert!(system.iter().all(|p| p.is_alive()));
    }

    #[test]
    fn test_bursts_accumulate_until_faded() {
        let mut system = ParticleSystem::new();
        for i in 0..150 {
            system.spawn_burst(Vec2::splat(i as f32), Color::from_hue(0.0), 10);
        }
        assert_eq!(system.len(), 1500);
        assert!(system.iter().all(|p| p.alpha == 1.0));
    }
}
