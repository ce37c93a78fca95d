//! Moving, bouncing, numbered discs

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::center_distance;

/// Fully saturated hue used for circles and their particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Hue in degrees [0, 360)
    pub hue: f32,
}

impl Color {
    pub fn from_hue(hue: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
        }
    }

    /// Random hue
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_hue(rng.random_range(0.0..360.0))
    }

    /// CSS color string for the canvas
    pub fn css(&self) -> String {
        format!("hsl({:.1}, 100%, 50%)", self.hue)
    }
}

/// A circle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant for the circle's lifetime
    pub radius: f32,
    pub color: Color,
    /// Text drawn at the center (1-based index)
    pub label: String,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32, color: Color, label: impl Into<String>, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            label: label.into(),
        }
    }

    /// Advance one frame inside a `bounds.x` by `bounds.y` canvas.
    ///
    /// Velocity components flip when the edge touches a wall, then the
    /// position moves by the velocity. With `clamp` set the circle is pulled
    /// back inside the canvas afterwards instead of overshooting the wall.
    pub fn advance(&mut self, bounds: Vec2, clamp: bool) {
        if self.pos.x + self.radius >= bounds.x || self.pos.x - self.radius <= 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y + self.radius >= bounds.y || self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;

        if clamp {
            let min = Vec2::splat(self.radius);
            let max = (bounds - self.radius).max(min);
            self.pos = self.pos.clamp(min, max);
        }
    }

    /// True if the discs are closer than the sum of radii plus `margin`
    pub fn overlaps(&self, other: &Circle, margin: f32) -> bool {
        center_distance(self.pos, other.pos) < self.radius + other.radius + margin
    }
}
