//! Scene generation
//!
//! Builds a fresh circle population with rejection sampling: each candidate
//! position is retried until it clears every placed circle by the configured
//! margin, or the attempt cap runs out.

use glam::Vec2;
use rand::Rng;

use super::circle::{Circle, Color};
use super::state::{SimEvent, SimState};
use crate::config::SimConfig;
use crate::controls::SceneRequest;

/// Replace the population with `request.count` new circles.
///
/// Particles from the previous scene are cleared too. Returns the number of
/// circles placed, which is less than requested only when
/// `accept_overlap_on_exhaustion` is off and placement ran out of attempts.
pub fn generate_scene(state: &mut SimState, request: SceneRequest) -> usize {
    state.circles.clear();
    state.particles.clear();

    let config = &state.config;
    let mut fallbacks = 0;
    let mut skipped = 0;

    for _ in 0..request.count {
        let radius = random_radius(&mut state.rng, config);
        let (pos, clear) = place_circle(&mut state.rng, config, &state.circles, radius);
        if !clear {
            if !config.accept_overlap_on_exhaustion {
                skipped += 1;
                continue;
            }
            fallbacks += 1;
        }

        let color = Color::random(&mut state.rng);
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * request.speed,
            (state.rng.random::<f32>() - 0.5) * request.speed,
        );
        let label = (state.circles.len() + 1).to_string();
        state.circles.push(Circle::new(pos, radius, color, label, vel));
    }

    if fallbacks > 0 {
        log::debug!("{} circles placed overlapping after exhausting attempts", fallbacks);
    }
    if skipped > 0 {
        log::warn!("Skipped {} circles that could not be placed", skipped);
    }
    log::info!(
        "Generated {} circles (requested {}, speed {}, seed {})",
        state.circles.len(),
        request.count,
        request.speed,
        state.seed
    );

    state.events.push(SimEvent::SceneGenerated {
        count: state.circles.len(),
    });
    state.circles.len()
}

/// Integer-valued radius in [min_radius, max_radius)
fn random_radius(rng: &mut impl Rng, config: &SimConfig) -> f32 {
    rng.random_range(config.min_radius..config.max_radius)
        .floor()
        .max(config.min_radius)
}

/// Sample positions inside the canvas inset by `radius` until one clears
/// `placed` by the margin. Returns the last candidate and whether it is clear.
fn place_circle(
    rng: &mut impl Rng,
    config: &SimConfig,
    placed: &[Circle],
    radius: f32,
) -> (Vec2, bool) {
    let mut pos = Vec2::ZERO;
    for _ in 0..config.max_placement_attempts {
        pos = Vec2::new(
            rng.random_range(radius..config.width - radius),
            rng.random_range(radius..config.height - radius),
        );
        let candidate = Circle::new(pos, radius, Color::from_hue(0.0), "", Vec2::ZERO);
        if !placed
            .iter()
            .any(|c| c.overlaps(&candidate, config.placement_margin))
        {
            return (pos, true);
        }
    }
    (pos, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(count: usize, speed: f32) -> SceneRequest {
        SceneRequest { count, speed }
    }

    #[test]
    fn test_generates_requested_count() {
        let mut state = SimState::new(SimConfig::default(), 42);
        let placed = generate_scene(&mut state, request(8, 4.0));
        assert_eq!(placed, 8);
        assert_eq!(state.circles.len(), 8);

        for (i, c) in state.circles.iter().enumerate() {
            assert_eq!(c.label, (i + 1).to_string());
            assert!(c.radius >= 20.0 && c.radius < 60.0);
            assert_eq!(c.radius, c.radius.floor());
            assert!(c.pos.x >= c.radius && c.pos.x <= 850.0 - c.radius);
            assert!(c.pos.y >= c.radius && c.pos.y <= 400.0 - c.radius);
            assert!(c.vel.x.abs() <= 2.0 && c.vel.y.abs() <= 2.0);
        }
    }

    #[test]
    fn test_regenerate_replaces_population() {
        let mut state = SimState::new(SimConfig::default(), 3);
        generate_scene(&mut state, request(6, 4.0));
        state
            .particles
            .spawn_burst(Vec2::new(10.0, 10.0), Color::from_hue(0.0), 5);

        generate_scene(&mut state, request(2, 4.0));
        assert_eq!(state.circles.len(), 2);
        assert!(state.particles.is_empty());
        assert_eq!(
            state.drain_events(),
            vec![
                SimEvent::SceneGenerated { count: 6 },
                SimEvent::SceneGenerated { count: 2 },
            ]
        );
    }

    #[test]
    fn test_same_seed_same_scene() {
        let mut a = SimState::new(SimConfig::default(), 99);
        let mut b = SimState::new(SimConfig::default(), 99);
        generate_scene(&mut a, request(10, 5.0));
        generate_scene(&mut b, request(10, 5.0));
        assert_eq!(a.circles, b.circles);
    }

    #[test]
    fn test_dense_request_accepts_overlap() {
        // Far more circles than fit: placement must still terminate
        let mut state = SimState::new(SimConfig::default(), 5);
        assert_eq!(generate_scene(&mut state, request(200, 2.0)), 200);
    }

    #[test]
    fn test_dense_request_skips_when_configured() {
        let config = SimConfig {
            accept_overlap_on_exhaustion: false,
            ..SimConfig::default()
        };
        let mut state = SimState::new(config, 5);
        let placed = generate_scene(&mut state, request(200, 2.0));
        assert!(placed < 200);

        for (i, a) in state.circles.iter().enumerate() {
            assert_eq!(a.label, (i + 1).to_string());
            for b in &state.circles[i + 1..] {
                assert!(!a.overlaps(b, 5.0));
            }
        }
    }
}
