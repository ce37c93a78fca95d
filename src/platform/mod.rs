//! Frame loop session
//!
//! The browser drives [`Session::frame`] from `requestAnimationFrame`. Each
//! (re)start hands out a new [`LoopToken`]; tokens from earlier starts go
//! stale, so a superseded callback chain stops instead of stepping and drawing
//! the scene a second time per refresh.

#[cfg(target_arch = "wasm32")]
mod web;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::SimConfig;
use crate::controls::SceneRequest;
use crate::sim::{FrameObserver, SimEvent, SimState, generate_scene, tick};

/// Hands out loop tokens and invalidates old ones
#[derive(Debug, Clone, Default)]
pub struct LoopControl {
    generation: Rc<Cell<u64>>,
}

/// Permission for one loop chain to keep running
#[derive(Debug, Clone)]
pub struct LoopToken {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl LoopControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any running chain and issue a token for a new one
    pub fn restart(&self) -> LoopToken {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        LoopToken {
            generation,
            current: Rc::clone(&self.generation),
        }
    }

    /// Cancel the running chain without starting another
    pub fn stop(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

impl LoopToken {
    /// False once the loop was restarted or stopped
    pub fn is_live(&self) -> bool {
        self.current.get() == self.generation
    }
}

/// Simulation state plus the loop that drives it
pub struct Session {
    pub state: SimState,
    control: LoopControl,
}

impl Session {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            state: SimState::new(config, seed),
            control: LoopControl::new(),
        }
    }

    /// Replace the scene and restart the loop. Returns the token the new
    /// frame chain must present each frame.
    pub fn start(&mut self, request: SceneRequest) -> LoopToken {
        let token = self.control.restart();
        // Events from the abandoned scene are stale
        self.state.drain_events();
        generate_scene(&mut self.state, request);
        token
    }

    /// Stop the current loop chain
    pub fn stop(&self) {
        self.control.stop();
    }

    /// Run one frame if `token` is still live.
    ///
    /// Returns the events the frame produced, or `None` if the chain was
    /// cancelled and must not reschedule itself.
    pub fn frame(
        &mut self,
        token: &LoopToken,
        observer: &mut impl FrameObserver,
    ) -> Option<Vec<SimEvent>> {
        if !token.is_live() {
            return None;
        }
        tick(&mut self.state, observer);
        Some(self.state.drain_events())
    }
}
