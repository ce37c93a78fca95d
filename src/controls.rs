//! Control surface input
//!
//! The page exposes a circle count field, a speed field and a start button.
//! Field text is parsed leniently (leading number, trailing junk ignored), and
//! anything that is not strictly positive turns the start action into a no-op.

/// A validated request to (re)generate the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRequest {
    /// Number of circles (> 0)
    pub count: usize,
    /// Speed magnitude (> 0); velocity components fall in [-speed/2, speed/2]
    pub speed: f32,
}

impl SceneRequest {
    /// Validate raw values. Returns `None` unless both are positive.
    pub fn new(count: i64, speed: f32) -> Option<Self> {
        if count <= 0 || !speed.is_finite() || speed <= 0.0 {
            return None;
        }
        Some(Self {
            count: usize::try_from(count).ok()?,
            speed,
        })
    }

    /// Parse the text of the count and speed fields
    pub fn parse(count: &str, speed: &str) -> Option<Self> {
        let count = parse_leading_int(count)?;
        let speed = parse_leading_float(speed)?;
        Self::new(count, speed)
    }
}

/// Parse an optionally signed integer prefix, e.g. `"12 circles"` -> 12, `"3.9"` -> 3
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Parse the longest prefix that is a finite float, e.g. `"4.5px"` -> 4.5
fn parse_leading_float(text: &str) -> Option<f32> {
    let text = text.trim_start();
    text.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f32>().ok().filter(|v| v.is_finite()))
}
