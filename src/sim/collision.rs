//! Circle-circle collision detection and response
//!
//! Response is deliberately simple: colliding circles swap velocities (no mass
//! weighting), get new random colors, spawn a particle burst each and are
//! pushed apart along their center line until they just touch.

use rand::Rng;

use super::circle::{Circle, Color};
use super::geometry::{center_distance, overlap, separation_axis};
use super::particle::ParticleSystem;
use super::state::SimEvent;

/// Side effects a collision produces outside the two circles
pub struct CollisionEffects<'a, R: Rng> {
    pub particles: &'a mut ParticleSystem,
    pub events: &'a mut Vec<SimEvent>,
    pub rng: &'a mut R,
    /// Particles spawned per circle
    pub burst_size: usize,
}

/// True if the discs interpenetrate (touching is not a collision)
#[inline]
pub fn circles_collide(a: &Circle, b: &Circle) -> bool {
    center_distance(a.pos, b.pos) < a.radius + b.radius
}

/// Push two overlapping circles apart, half the overlap each.
///
/// Coincident centers are separated along the x axis. Returns the overlap
/// that was removed (0 if the circles did not overlap).
pub fn separate_circles(a: &mut Circle, b: &mut Circle) -> f32 {
    let distance = center_distance(a.pos, b.pos);
    let depth = overlap(a.radius, b.radius, distance);
    if depth <= 0.0 {
        return 0.0;
    }

    let push = separation_axis(a.pos, b.pos) * (depth / 2.0);
    a.pos -= push;
    b.pos += push;
    depth
}

/// Apply the full collision response to a colliding pair.
///
/// `indices` are the population indices of `a` and `b`, reported in the
/// emitted [`SimEvent::Collision`].
pub fn resolve_collision<R: Rng>(
    a: &mut Circle,
    b: &mut Circle,
    indices: (usize, usize),
    fx: &mut CollisionEffects<'_, R>,
) {
    fx.events.push(SimEvent::Collision {
        a: indices.0,
        b: indices.1,
        point: (a.pos + b.pos) / 2.0,
    });

    // Bursts use the colors from before the collision
    fx.particles.spawn_burst(a.pos, a.color, fx.burst_size);
    fx.particles.spawn_burst(b.pos, b.color, fx.burst_size);

    a.color = Color::random(&mut *fx.rng);
    b.color = Color::random(&mut *fx.rng);

    std::mem::swap(&mut a.vel, &mut b.vel);

    separate_circles(a, b);
}

/// Resolve circle `index` against every circle after it, in order.
///
/// Each collision is applied immediately, so later pairs see the updated
/// position and velocity. Returns the number of collisions.
pub fn resolve_against_later<R: Rng>(
    circles: &mut [Circle],
    index: usize,
    fx: &mut CollisionEffects<'_, R>,
) -> usize {
    if index >= circles.len() {
        return 0;
    }
    let (head, tail) = circles.split_at_mut(index + 1);
    let current = &mut head[index];

    let mut hits = 0;
    for (offset, other) in tail.iter_mut().enumerate() {
        if circles_collide(current, other) {
            resolve_collision(current, other, (index, index + 1 + offset), fx);
            hits += 1;
        }
    }
    hits
}

/// One full pass over all pairs (i < j) without moving anything first
pub fn resolve_all<R: Rng>(circles: &mut [Circle], fx: &mut CollisionEffects<'_, R>) -> usize {
    (0..circles.len())
        .map(|i| resolve_against_later(circles, i, fx))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn circle(x: f32, y: f32, r: f32, hue: f32, vel: Vec2) -> Circle {
        Circle::new(Vec2::new(x, y), r, Color::from_hue(hue), "1", vel)
    }

    #[test]
    fn test_touching_is_not_colliding() {
        let a = circle(100.0, 100.0, 20.0, 0.0, Vec2::ZERO);
        let b = circle(140.0, 100.0, 20.0, 0.0, Vec2::ZERO);
        assert!(!circles_collide(&a, &b));

        let c = circle(139.9, 100.0, 20.0, 0.0, Vec2::ZERO);
        assert!(circles_collide(&a, &c));
        assert!(circles_collide(&c, &a));
    }

    #[test]
    fn test_separation_splits_evenly() {
        let mut a = circle(100.0, 100.0, 20.0, 0.0, Vec2::ZERO);
        let mut b = circle(100.0, 130.0, 20.0, 0.0, Vec2::ZERO);

        let removed = separate_circles(&mut a, &mut b);
        assert!((removed - 10.0).abs() < 1e-4);
        assert!((a.pos - Vec2::new(100.0, 95.0)).length() < 1e-4);
        assert!((b.pos - Vec2::new(100.0, 135.0)).length() < 1e-4);
    }

    #[test]
    fn test_separation_no_overlap_is_noop() {
        let mut a = circle(100.0, 100.0, 20.0, 0.0, Vec2::ZERO);
        let mut b = circle(200.0, 100.0, 20.0, 0.0, Vec2::ZERO);
        assert_eq!(separate_circles(&mut a, &mut b), 0.0);
        assert_eq!(a.pos, Vec2::new(100.0, 100.0));
        assert_eq!(b.pos, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_separation_coincident_centers() {
        let mut a = circle(300.0, 200.0, 20.0, 0.0, Vec2::ZERO);
        let mut b = circle(300.0, 200.0, 30.0, 0.0, Vec2::ZERO);

        separate_circles(&mut a, &mut b);
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert_eq!(a.pos, Vec2::new(275.0, 200.0));
        assert_eq!(b.pos, Vec2::new(325.0, 200.0));
    }

    #[test]
    fn test_resolve_collision_effects() {
        let mut particles = ParticleSystem::new();
        let mut events = Vec::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut fx = CollisionEffects {
            particles: &mut particles,
            events: &mut events,
            rng: &mut rng,
            burst_size: 10,
        };

        let mut a = circle(100.0, 100.0, 20.0, 10.0, Vec2::new(2.0, 1.0));
        let mut b = circle(130.0, 100.0, 20.0, 200.0, Vec2::new(-3.0, 0.5));
        resolve_collision(&mut a, &mut b, (0, 1), &mut fx);

        assert_eq!(a.vel, Vec2::new(-3.0, 0.5));
        assert_eq!(b.vel, Vec2::new(2.0, 1.0));
        assert!((center_distance(a.pos, b.pos) - 40.0).abs() < 1e-4);

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            SimEvent::Collision {
                a: 0,
                b: 1,
                point: Vec2::new(115.0, 100.0)
            }
        );

        assert_eq!(particles.len(), 20);
        let at_a: Vec<_> = particles
            .iter()
            .filter(|p| p.pos == Vec2::new(100.0, 100.0))
            .collect();
        assert_eq!(at_a.len(), 10);
        assert!(at_a.iter().all(|p| p.color.hue == 10.0 && p.alpha == 1.0));
    }

    #[test]
    fn test_later_pairs_see_earlier_resolution() {
        let mut particles = ParticleSystem::new();
        let mut events = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fx = CollisionEffects {
            particles: &mut particles,
            events: &mut events,
            rng: &mut rng,
            burst_size: 1,
        };

        // Circle 0 overlaps both 1 and 2
        let mut circles = vec![
            circle(200.0, 200.0, 20.0, 0.0, Vec2::new(1.0, 0.0)),
            circle(230.0, 200.0, 20.0, 0.0, Vec2::new(2.0, 0.0)),
            circle(170.0, 200.0, 20.0, 0.0, Vec2::new(3.0, 0.0)),
        ];
        let hits = resolve_against_later(&mut circles, 0, &mut fx);
        assert_eq!(hits, 2);

        // 0 took 1's velocity, then swapped that with 2
        assert_eq!(circles[1].vel, Vec2::new(1.0, 0.0));
        assert_eq!(circles[0].vel, Vec2::new(3.0, 0.0));
        assert_eq!(circles[2].vel, Vec2::new(2.0, 0.0));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_resolve_out_of_range_index() {
        let mut particles = ParticleSystem::new();
        let mut events = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fx = CollisionEffects {
            particles: &mut particles,
            events: &mut events,
            rng: &mut rng,
            burst_size: 1,
        };
        let mut circles: Vec<Circle> = Vec::new();
        assert_eq!(resolve_against_later(&mut circles, 0, &mut fx), 0);
    }
}
