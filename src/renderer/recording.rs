//! Draw command recorder for headless runs and tests

use glam::Vec2;

use super::{DiscStyle, DrawSink};
use crate::sim::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Disc { center: Vec2, radius: f32, style: DiscStyle },
    Dot { center: Vec2, radius: f32, color: Color, alpha: f32 },
    Text { text: String, center: Vec2, font: String },
}

/// Sink that stores every command instead of drawing it
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Centers and opacities of recorded dots
    pub fn dots(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Dot { center, alpha, .. } => Some((*center, *alpha)),
            _ => None,
        })
    }

    /// Number of discs drawn
    pub fn disc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Disc { .. }))
            .count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawSink for RecordingSink {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, style: &DiscStyle) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            style: *style,
        });
    }

    fn fill_dot(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.commands.push(DrawCommand::Dot {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn fill_text(&mut self, text: &str, center: Vec2, font: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            font: font.to_string(),
        });
    }
}
