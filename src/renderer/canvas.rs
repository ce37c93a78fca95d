//! Canvas 2D backend

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DiscStyle, DrawSink, FOREGROUND};
use crate::sim::Color;

/// Draws onto an HTML canvas through its 2D context
pub struct CanvasSink {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSink {
    /// Size the canvas and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Option<Self> {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl DrawSink for CanvasSink {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, style: &DiscStyle) {
        let ctx = &self.ctx;
        let fill = style.fill.css();

        ctx.begin_path();
        ctx.set_shadow_color(&fill);
        ctx.set_shadow_blur(style.glow_blur as f64);
        ctx.set_fill_style_str(&fill);
        ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
        ctx.fill();

        // Glow only applies to the fill
        ctx.set_shadow_blur(0.0);
        ctx.set_stroke_style_str(FOREGROUND);
        ctx.set_line_width(style.outline_width as f64);
        ctx.stroke();
        ctx.close_path();
    }

    fn fill_dot(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        ctx.set_fill_style_str(&color.css());
        ctx.begin_path();
        ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
        ctx.fill();
        ctx.close_path();
        ctx.set_global_alpha(1.0);
    }

    fn fill_text(&mut self, text: &str, center: Vec2, font: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(FOREGROUND);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_font(font);
        ctx.fill_text(text, center.x as f64, center.y as f64).ok();
    }
}
