//! Per-frame simulation step
//!
//! One call advances the whole scene by one display frame:
//! 1. each circle in population order is advanced, reported to the observer,
//!    then resolved against every later circle
//! 2. particles fade, survivors are reported, dead ones are pruned
//!
//! Drawing happens through [`FrameObserver`] so the simulation itself stays
//! free of platform code.

use super::circle::Circle;
use super::collision::{CollisionEffects, resolve_against_later};
use super::particle::Particle;
use super::state::SimState;
use crate::config::SimConfig;

/// Receives the scene as it is stepped (renderers, recorders)
pub trait FrameObserver {
    /// Called once before anything moves
    fn on_frame_start(&mut self, _config: &SimConfig) {}

    /// Called right after a circle has been advanced, before its collisions
    fn on_circle(&mut self, _circle: &Circle, _config: &SimConfig) {}

    /// Called for each particle still visible after fading
    fn on_particle(&mut self, _particle: &Particle, _config: &SimConfig) {}
}

/// Observer that ignores everything
pub struct NoOpFrameObserver;

impl FrameObserver for NoOpFrameObserver {}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, observer: &mut impl FrameObserver) {
    let SimState {
        config,
        circles,
        particles,
        stats,
        rng,
        events,
        ..
    } = state;
    let bounds = config.bounds();

    observer.on_frame_start(config);

    let mut collisions = 0;
    let mut fx = CollisionEffects {
        particles: &mut *particles,
        events: &mut *events,
        rng: &mut *rng,
        burst_size: config.burst_size,
    };
    for i in 0..circles.len() {
        circles[i].advance(bounds, config.clamp_to_bounds);
        observer.on_circle(&circles[i], config);
        collisions += resolve_against_later(circles, i, &mut fx);
    }

    let pruned = particles.tick(config.particle_fade, |p| observer.on_particle(p, config));

    stats.frames += 1;
    stats.collisions += collisions as u64;
    if collisions > 0 {
        log::trace!(
            "frame {}: {} collisions, {} particles ({} pruned)",
            stats.frames,
            collisions,
            particles.len(),
            pruned
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::SceneRequest;
    use crate::sim::circle::Color;
    use crate::sim::scene::generate_scene;
    use crate::sim::state::SimEvent;
    use glam::Vec2;

    /// Records the order of observer callbacks
    #[derive(Default)]
    struct Trace {
        calls: Vec<String>,
    }

    impl FrameObserver for Trace {
        fn on_frame_start(&mut self, _config: &SimConfig) {
            self.calls.push("start".into());
        }
        fn on_circle(&mut self, circle: &Circle, _config: &SimConfig) {
            self.calls.push(format!("circle {}", circle.label));
        }
        fn on_particle(&mut self, _particle: &Particle, _config: &SimConfig) {
            self.calls.push("particle".into());
        }
    }

    fn circle(x: f32, y: f32, label: &str, vel: Vec2) -> Circle {
        Circle::new(Vec2::new(x, y), 20.0, Color::from_hue(0.0), label, vel)
    }

    #[test]
    fn test_tick_moves_and_counts_frames() {
        let mut state = SimState::new(SimConfig::default(), 1);
        state.circles.push(circle(100.0, 100.0, "1", Vec2::new(2.0, 3.0)));

        tick(&mut state, &mut NoOpFrameObserver);
        assert_eq!(state.circles[0].pos, Vec2::new(102.0, 103.0));
        assert_eq!(state.stats.frames, 1);
        assert_eq!(state.stats.collisions, 0);
    }

    #[test]
    fn test_observer_order() {
        let mut state = SimState::new(SimConfig::default(), 1);
        state.circles.push(circle(100.0, 100.0, "1", Vec2::ZERO));
        state.circles.push(circle(130.0, 100.0, "2", Vec2::ZERO));

        let mut trace = Trace::default();
        tick(&mut state, &mut trace);

        // Collision spawned 20 particles, all drawn at alpha 0.98
        assert_eq!(trace.calls[..3], ["start", "circle 1", "circle 2"]);
        assert_eq!(trace.calls.len(), 3 + 20);
        assert!(trace.calls[3..].iter().all(|c| c == "particle"));
    }

    #[test]
    fn test_collision_uses_post_advance_positions() {
        let mut state = SimState::new(SimConfig::default(), 1);
        // 41 apart: not touching until circle 1 steps right
        state.circles.push(circle(100.0, 100.0, "1", Vec2::new(2.0, 0.0)));
        state.circles.push(circle(141.0, 100.0, "2", Vec2::ZERO));

        tick(&mut state, &mut NoOpFrameObserver);
        assert_eq!(state.stats.collisions, 1);
        assert_eq!(state.circles[0].vel, Vec2::ZERO);
        assert_eq!(state.circles[1].vel, Vec2::new(2.0, 0.0));

        let events = state.drain_events();
        assert!(matches!(events[..], [SimEvent::Collision { a: 0, b: 1, .. }]));
        assert!(state.drain_events().is_empty());
    }

    /// Counts circles reported outside the canvas right after they moved
    #[derive(Default)]
    struct BoundsCheck {
        checked: usize,
        escaped: usize,
    }

    impl FrameObserver for BoundsCheck {
        fn on_circle(&mut self, circle: &Circle, config: &SimConfig) {
            self.checked += 1;
            let min = Vec2::splat(circle.radius);
            let max = config.bounds() - circle.radius;
            if circle.pos.cmplt(min).any() || circle.pos.cmpgt(max).any() {
                self.escaped += 1;
            }
        }
    }

    #[test]
    fn test_long_run_stays_finite_and_in_bounds() {
        let mut state = SimState::new(SimConfig::default(), 2024);
        generate_scene(&mut state, SceneRequest::new(25, 8.0).unwrap());

        let mut check = BoundsCheck::default();
        for _ in 0..2000 {
            tick(&mut state, &mut check);
        }
        assert_eq!(state.stats.frames, 2000);
        assert_eq!(check.checked, 25 * 2000);
        assert_eq!(check.escaped, 0);
        for c in &state.circles {
            assert!(c.pos.is_finite() && c.vel.is_finite());
        }
    }
}
