//! Audio cues using the Web Audio API
//!
//! Procedurally generated sound effects - no external files needed. Cues are
//! fire-and-forget: overlapping sounds within a frame are fine and nothing
//! here blocks the simulation.

use crate::config::SimConfig;
use crate::sim::SimEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Two circles collided - short click
    Collision,
    /// A new scene started
    SceneStart,
}

impl SoundEffect {
    /// The cue a simulation event should trigger, if any
    pub fn for_event(event: &SimEvent) -> Option<Self> {
        match event {
            SimEvent::Collision { .. } => Some(SoundEffect::Collision),
            SimEvent::SceneGenerated { count } if *count > 0 => Some(SoundEffect::SceneStart),
            SimEvent::SceneGenerated { .. } => None,
        }
    }
}

/// Combined gain for a cue (0.0 when muted)
pub fn effective_volume(cue_volume: f32, master_volume: f32, muted: bool) -> f32 {
    if muted {
        0.0
    } else {
        (cue_volume * master_volume).clamp(0.0, 1.0)
    }
}

/// Volume settings the page starts with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioLevels {
    /// Volume of the cues themselves (0.0 - 1.0)
    pub cue_volume: f32,
    pub master_volume: f32,
    pub muted: bool,
}

impl AudioLevels {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            cue_volume: config.collision_volume.clamp(0.0, 1.0),
            master_volume: config.master_volume.clamp(0.0, 1.0),
            muted: config.muted,
        }
    }

    /// Gain applied to every cue
    pub fn gain(&self) -> f32 {
        effective_volume(self.cue_volume, self.master_volume, self.muted)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioLevels, SoundEffect};

    /// Audio manager for the page
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        levels: AudioLevels,
    }

    impl AudioManager {
        pub fn new(levels: AudioLevels) -> Self {
            if levels.muted {
                log::info!("Audio muted by config");
            }
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, levels }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.levels.gain();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers start the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Collision => self.play_click(ctx, vol),
                SoundEffect::SceneStart => self.play_scene_start(ctx, vol),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Collision - short mouse-click tick
        fn play_click(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 2400.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.4, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.001, t + 0.025)
                    .ok();
                osc.frequency().set_value_at_time(2400.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(900.0, t + 0.02)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.03).ok();
            }

            // Body of the click
            if let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Triangle) {
                gain.gain().set_value_at_time(vol * 0.6, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.001, t + 0.04)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.05).ok();
            }
        }

        /// Scene start - quick rising chirp
        fn play_scene_start(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.frequency().set_value_at_time(300.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(900.0, t + 0.12)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.16).ok();
        }
    }
}
