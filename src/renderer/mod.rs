//! Rendering
//!
//! The simulation draws through [`DrawSink`], a small set of 2D commands.
//! The browser backend maps them onto a Canvas 2D context; the headless
//! runner and tests record them instead.

pub mod recording;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::config::SimConfig;
use crate::sim::{Circle, Color, FrameObserver, Particle};

pub use recording::{DrawCommand, RecordingSink};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSink;

/// Outline and label color
pub const FOREGROUND: &str = "white";

/// Fill, glow and outline of a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscStyle {
    pub fill: Color,
    pub glow_blur: f32,
    pub outline_width: f32,
}

/// Drawing surface the scene is rendered onto
pub trait DrawSink {
    /// Erase the whole surface
    fn clear(&mut self, width: f32, height: f32);

    /// Filled disc with a glow in its own color and a white outline
    fn fill_disc(&mut self, center: Vec2, radius: f32, style: &DiscStyle);

    /// Small dot drawn at `alpha` opacity. Implementations must restore full
    /// opacity afterwards.
    fn fill_dot(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);

    /// Text centered on `center`
    fn fill_text(&mut self, text: &str, center: Vec2, font: &str);
}

/// Something that knows how to draw itself onto a [`DrawSink`]
pub trait Render {
    fn render(&self, sink: &mut dyn DrawSink, config: &SimConfig);
}

impl Render for Circle {
    fn render(&self, sink: &mut dyn DrawSink, config: &SimConfig) {
        let style = DiscStyle {
            fill: self.color,
            glow_blur: config.glow_blur,
            outline_width: config.outline_width,
        };
        sink.fill_disc(self.pos, self.radius, &style);
        sink.fill_text(&self.label, self.pos, &config.label_font);
    }
}

impl Render for Particle {
    fn render(&self, sink: &mut dyn DrawSink, config: &SimConfig) {
        sink.fill_dot(self.pos, config.particle_radius, self.color, self.alpha);
    }
}

/// Draws the scene while it is being stepped
pub struct Painter<'a> {
    sink: &'a mut dyn DrawSink,
}

impl<'a> Painter<'a> {
    pub fn new(sink: &'a mut dyn DrawSink) -> Self {
        Self { sink }
    }
}

impl FrameObserver for Painter<'_> {
    fn on_frame_start(&mut self, config: &SimConfig) {
        self.sink.clear(config.width, config.height);
    }

    fn on_circle(&mut self, circle: &Circle, config: &SimConfig) {
        circle.render(&mut *self.sink, config);
    }

    fn on_particle(&mut self, particle: &Particle, config: &SimConfig) {
        particle.render(&mut *self.sink, config);
    }
}
